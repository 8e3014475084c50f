
/// Field validation rules
pub mod validation_tests;
