//! Feeling vocabulary handlers.

mod add_custom_feeling;

pub use add_custom_feeling::{
    AddCustomFeelingCommand, AddCustomFeelingHandler, AddCustomFeelingResult,
};
