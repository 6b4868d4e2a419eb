//! JSON input loading module.

mod input;

pub use input::{
    load_pieces, load_request, load_settings, parse_pieces, parse_request, parse_settings,
    CalculationRequest,
};
