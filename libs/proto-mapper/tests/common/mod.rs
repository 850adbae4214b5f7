//! Test schema `demo.proto`, built in code so no `protoc` is needed:
//!
//! ```proto
//! syntax = "proto3";
//! package demo;
//! import "google/protobuf/timestamp.proto";
//!
//! enum Status { STATUS_UNKNOWN = 0; STATUS_ACTIVE = 1; STATUS_SUSPENDED = 2; }
//! message Address { string city = 1; string postal_code = 2; }
//! message Person {
//!   int32 id = 1;
//!   string display_name = 2;
//!   bool active = 3;
//!   repeated string tags = 4;
//!   Address address = 5;
//!   string created_at = 6;
//!   Status status = 7;
//!   int64 balance = 8;
//!   uint64 visits = 9;
//!   bytes avatar = 10;
//!   google.protobuf.Timestamp updated_at = 11;
//!   optional string nickname = 12;
//! }
//! message Label { int32 id = 1; string label = 2; }
//! ```
#![allow(dead_code)]

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use prost_reflect::{DescriptorPool, MessageDescriptor, ReflectMessage};
use prost_types::field_descriptor_proto::{Label as FieldLabel, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, OneofDescriptorProto, Timestamp,
};
use serde::{Deserialize, Serialize};

// ---- Schema ----

fn field(name: &str, json_name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        json_name: Some(json_name.to_string()),
        number: Some(number),
        label: Some(FieldLabel::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

fn typed(mut f: FieldDescriptorProto, type_name: &str) -> FieldDescriptorProto {
    f.type_name = Some(type_name.to_string());
    f
}

fn repeated(mut f: FieldDescriptorProto) -> FieldDescriptorProto {
    f.label = Some(FieldLabel::Repeated as i32);
    f
}

/// proto3 `optional`: explicit presence through a synthetic oneof.
fn optional(mut f: FieldDescriptorProto, oneof_index: i32) -> FieldDescriptorProto {
    f.proto3_optional = Some(true);
    f.oneof_index = Some(oneof_index);
    f
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

fn demo_file() -> FileDescriptorProto {
    let status = EnumDescriptorProto {
        name: Some("Status".to_string()),
        value: ["STATUS_UNKNOWN", "STATUS_ACTIVE", "STATUS_SUSPENDED"]
            .iter()
            .zip(0..)
            .map(|(name, number)| EnumValueDescriptorProto {
                name: Some(name.to_string()),
                number: Some(number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };

    let mut person = message(
        "Person",
        vec![
            field("id", "id", 1, Type::Int32),
            field("display_name", "displayName", 2, Type::String),
            field("active", "active", 3, Type::Bool),
            repeated(field("tags", "tags", 4, Type::String)),
            typed(field("address", "address", 5, Type::Message), ".demo.Address"),
            field("created_at", "createdAt", 6, Type::String),
            typed(field("status", "status", 7, Type::Enum), ".demo.Status"),
            field("balance", "balance", 8, Type::Int64),
            field("visits", "visits", 9, Type::Uint64),
            field("avatar", "avatar", 10, Type::Bytes),
            typed(
                field("updated_at", "updatedAt", 11, Type::Message),
                ".google.protobuf.Timestamp",
            ),
            optional(field("nickname", "nickname", 12, Type::String), 0),
        ],
    );
    person.oneof_decl = vec![OneofDescriptorProto {
        name: Some("_nickname".to_string()),
        ..Default::default()
    }];

    FileDescriptorProto {
        name: Some("demo.proto".to_string()),
        package: Some("demo".to_string()),
        syntax: Some("proto3".to_string()),
        dependency: vec!["google/protobuf/timestamp.proto".to_string()],
        enum_type: vec![status],
        message_type: vec![
            message(
                "Address",
                vec![
                    field("city", "city", 1, Type::String),
                    field("postal_code", "postalCode", 2, Type::String),
                ],
            ),
            person,
            message(
                "Label",
                vec![
                    field("id", "id", 1, Type::Int32),
                    field("label", "label", 2, Type::String),
                ],
            ),
        ],
        ..Default::default()
    }
}

// The global pool starts out holding the well-known types.
pub static POOL: LazyLock<DescriptorPool> = LazyLock::new(|| {
    let mut pool = DescriptorPool::global();
    pool.add_file_descriptor_proto(demo_file())
        .expect("demo.proto is a valid descriptor");
    pool
});

pub fn descriptor(name: &str) -> MessageDescriptor {
    POOL.get_message_by_name(name)
        .unwrap_or_else(|| panic!("{name} not in demo pool"))
}

// ---- Wire messages ----

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Status {
    Unknown = 0,
    Active = 1,
    Suspended = 2,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Address {
    #[prost(string, tag = "1")]
    pub city: String,
    #[prost(string, tag = "2")]
    pub postal_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Person {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(bool, tag = "3")]
    pub active: bool,
    #[prost(string, repeated, tag = "4")]
    pub tags: Vec<String>,
    #[prost(message, optional, tag = "5")]
    pub address: Option<Address>,
    #[prost(string, tag = "6")]
    pub created_at: String,
    #[prost(enumeration = "Status", tag = "7")]
    pub status: i32,
    #[prost(int64, tag = "8")]
    pub balance: i64,
    #[prost(uint64, tag = "9")]
    pub visits: u64,
    #[prost(bytes = "vec", tag = "10")]
    pub avatar: Vec<u8>,
    #[prost(message, optional, tag = "11")]
    pub updated_at: Option<Timestamp>,
    #[prost(string, optional, tag = "12")]
    pub nickname: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Label {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub label: String,
}

impl ReflectMessage for Address {
    fn descriptor(&self) -> MessageDescriptor {
        descriptor("demo.Address")
    }
}

impl ReflectMessage for Person {
    fn descriptor(&self) -> MessageDescriptor {
        descriptor("demo.Person")
    }
}

impl ReflectMessage for Label {
    fn descriptor(&self) -> MessageDescriptor {
        descriptor("demo.Label")
    }
}

// ---- Domain objects ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDto {
    #[default]
    StatusUnknown,
    StatusActive,
    StatusSuspended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: i32,
    pub display_name: Option<String>,
    pub active: bool,
    pub tags: Vec<String>,
    pub address: Option<AddressDto>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: StatusDto,
    pub balance: i64,
    pub visits: u64,
    #[serde(with = "proto_mapper::base64_bytes")]
    pub avatar: Vec<u8>,
    pub updated_at: Option<DateTime<Utc>>,
    // `null` would set an `optional` wire field, so `None` is left out instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

pub const AVATAR: [u8; 5] = [0xde, 0xad, 0xbe, 0xef, 0xff];

pub fn created_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub fn person_dto() -> PersonDto {
    PersonDto {
        id: 42,
        display_name: Some("Ada".to_string()),
        active: true,
        tags: vec!["admin".to_string(), "ops".to_string()],
        address: Some(AddressDto {
            city: "London".to_string(),
            postal_code: "N1".to_string(),
        }),
        created_at: created_at(),
        status: StatusDto::StatusActive,
        balance: -12_345_678_901,
        visits: 9_876_543_210,
        avatar: AVATAR.to_vec(),
        updated_at: Some(created_at()),
        nickname: Some(String::new()),
    }
}

pub fn person() -> Person {
    Person {
        id: 42,
        display_name: "Ada".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "ops".to_string()],
        address: Some(Address {
            city: "London".to_string(),
            postal_code: "N1".to_string(),
        }),
        created_at: "2024-05-01T12:30:00Z".to_string(),
        status: Status::Active as i32,
        balance: -12_345_678_901,
        visits: 9_876_543_210,
        avatar: AVATAR.to_vec(),
        updated_at: Some(Timestamp {
            seconds: created_at().timestamp(),
            nanos: 0,
        }),
        nickname: Some(String::new()),
    }
}
