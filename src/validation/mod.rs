//! Statistical validation of fitted models.


pub use residual_tests::{durbin_watson, ljung_box, LjungBoxResult};
