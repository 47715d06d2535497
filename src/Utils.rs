/// Input clean-up for structure strings typed by users
pub mod sanitize;
/// Optional-field records of compound properties returned by external lookups, with the
/// fallbacks used when a field is missing
pub mod compound_props;
