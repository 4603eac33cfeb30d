//! Parameter storage
//!
//! A fixed-capacity name → value map, so it works without an allocator.
//! Groups register their defaults once at startup; overrides may only
//! replace values that were registered.

use heapless::index_map::FnvIndexMap;
use heapless::String;

use super::error::ParameterError;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (must be a power of two)
pub const MAX_PARAMS: usize = 16;

type ParamName = String<PARAM_NAME_LEN>;

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit floating point
    Float(f64),
}

/// In-memory parameter store
#[derive(Debug, Default)]
pub struct ParameterStore {
    values: FnvIndexMap<ParamName, ParamValue, MAX_PARAMS>,
}

impl ParameterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            values: FnvIndexMap::new(),
        }
    }

    /// Current value of `name`
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = make_key(name).ok()?;
        self.values.get(&key)
    }

    /// Replace the value of a registered parameter
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = make_key(name)?;
        match self.values.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ParameterError::Unknown),
        }
    }

    /// Register `name` with its default
    ///
    /// Registering an existing name keeps the current value.
    pub fn register(&mut self, name: &str, default: ParamValue) -> Result<(), ParameterError> {
        let key = make_key(name)?;
        if self.values.contains_key(&key) {
            return Ok(());
        }
        self.values
            .insert(key, default)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn make_key(name: &str) -> Result<ParamName, ParameterError> {
    let mut key = ParamName::new();
    key.push_str(name).map_err(|_| ParameterError::NameTooLong)?;
    Ok(key)
}
