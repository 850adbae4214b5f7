//! Text-to-text steps applied to the intermediate JSON between the two legs
//! of a conversion.
//!
//! Any `Fn(&str) -> String` closure is a [`Customizer`]. The structs in this
//! module cover the common edits (rename, remove, default a property) and
//! address their target object by JSON pointer, root by default.

use serde_json::{Map, Value};

use crate::error::MappingError;

/// One step of a customizer chain.
pub trait Customizer {
    /// Transform the intermediate JSON text.
    ///
    /// Returning an error aborts the conversion. Returning text that is not
    /// valid JSON is not checked here; the next decoding leg reports it.
    fn customize(&self, json: &str) -> Result<String, MappingError>;

    /// Name used in logs and error context.
    fn name(&self) -> &str {
        "customizer"
    }
}

impl<F> Customizer for F
where
    F: Fn(&str) -> String,
{
    fn customize(&self, json: &str) -> Result<String, MappingError> {
        Ok(self(json))
    }

    /// Closures have no readable name; wrap one in a named struct when logs
    /// need to tell steps apart.
    fn name(&self) -> &str {
        "closure"
    }
}

/// Run `customizers` in order, each on the previous one's output.
///
/// An empty slice returns `json` unchanged. Stops at the first failure.
pub fn apply_chain(
    json: String,
    customizers: &[&dyn Customizer],
) -> Result<String, MappingError> {
    run_steps(json, customizers.iter().copied())
}

fn run_steps<'a, C>(
    json: String,
    steps: impl Iterator<Item = &'a C>,
) -> Result<String, MappingError>
where
    C: Customizer + ?Sized + 'a,
{
    let mut current = json;
    for (position, customizer) in steps.enumerate() {
        tracing::trace!(position, customizer = customizer.name(), "applying customizer");
        current = customizer
            .customize(&current)
            .map_err(|e| e.with_context(format!("customizer '{}'", customizer.name())))?;
    }
    Ok(current)
}

/// Owned, reusable ordered list of customizers. Itself a [`Customizer`].
#[derive(Default)]
pub struct CustomizerChain {
    steps: Vec<Box<dyn Customizer + Send + Sync>>,
}

impl CustomizerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step; builder style.
    pub fn then(mut self, step: impl Customizer + Send + Sync + 'static) -> Self {
        self.push(step);
        self
    }

    pub fn push(&mut self, step: impl Customizer + Send + Sync + 'static) {
        self.steps.push(Box::new(step));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Customizer for CustomizerChain {
    fn customize(&self, json: &str) -> Result<String, MappingError> {
        run_steps(json.to_string(), self.steps.iter().map(|s| &**s))
    }

    fn name(&self) -> &str {
        "chain"
    }
}

impl std::fmt::Debug for CustomizerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.steps.iter().map(|s| s.name())).finish()
    }
}

// ---- JSON value edits ----

/// Parse, edit in place, print.
fn edit_object(
    json: &str,
    pointer: &str,
    edit: impl FnOnce(&mut Map<String, Value>),
) -> Result<String, MappingError> {
    let mut doc: Value = serde_json::from_str(json)
        .map_err(|e| MappingError::customizer(format!("input is not JSON: {e}")))?;
    let target = doc
        .pointer_mut(pointer)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MappingError::customizer(format!("no object at '{pointer}'")))?;
    edit(target);
    serde_json::to_string(&doc).map_err(|e| MappingError::customizer(e.to_string()))
}

/// Move property `from` to `to`. No-op when `from` is absent.
#[derive(Debug, Clone)]
pub struct RenameField {
    pointer: String,
    from: String,
    to: String,
}

impl RenameField {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { pointer: String::new(), from: from.into(), to: to.into() }
    }

    /// Operate on the object at `pointer` (RFC 6901) instead of the root.
    pub fn at(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = pointer.into();
        self
    }
}

impl Customizer for RenameField {
    fn customize(&self, json: &str) -> Result<String, MappingError> {
        edit_object(json, &self.pointer, |obj| {
            if let Some(v) = obj.remove(&self.from) {
                obj.insert(self.to.clone(), v);
            }
        })
    }

    fn name(&self) -> &str {
        "rename"
    }
}

/// Drop property `name`. No-op when absent.
#[derive(Debug, Clone)]
pub struct RemoveField {
    pointer: String,
    name: String,
}

impl RemoveField {
    pub fn new(name: impl Into<String>) -> Self {
        Self { pointer: String::new(), name: name.into() }
    }

    pub fn at(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = pointer.into();
        self
    }
}

impl Customizer for RemoveField {
    fn customize(&self, json: &str) -> Result<String, MappingError> {
        edit_object(json, &self.pointer, |obj| {
            obj.remove(&self.name);
        })
    }

    fn name(&self) -> &str {
        "remove"
    }
}

/// Insert property `name` with `value` unless it is already present.
#[derive(Debug, Clone)]
pub struct DefaultField {
    pointer: String,
    name: String,
    value: Value,
}

impl DefaultField {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { pointer: String::new(), name: name.into(), value: value.into() }
    }

    pub fn at(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = pointer.into();
        self
    }
}

impl Customizer for DefaultField {
    fn customize(&self, json: &str) -> Result<String, MappingError> {
        edit_object(json, &self.pointer, |obj| {
            obj.entry(self.name.clone()).or_insert_with(|| self.value.clone());
        })
    }

    fn name(&self) -> &str {
        "default"
    }
}

/// Arbitrary edit of the parsed document. `f` may reject it with a message.
pub struct ValueCustomizer<F> {
    name: String,
    f: F,
}

impl<F> ValueCustomizer<F>
where
    F: Fn(&mut Value) -> Result<(), String>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> Customizer for ValueCustomizer<F>
where
    F: Fn(&mut Value) -> Result<(), String>,
{
    fn customize(&self, json: &str) -> Result<String, MappingError> {
        let mut doc: Value = serde_json::from_str(json)
            .map_err(|e| MappingError::customizer(format!("input is not JSON: {e}")))?;
        (self.f)(&mut doc).map_err(MappingError::customizer)?;
        serde_json::to_string(&doc).map_err(|e| MappingError::customizer(e.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
