// Result-shaping pipeline: filter → sort → paginate, plus the state store
// that orchestrates the three fragments and the query-string synchronizer.
// Everything here is pure and synchronous — fetching lives in `source`.

pub mod filters;
pub mod pagination;
pub mod range;
pub mod sorting;
pub mod store;
pub mod summary;
pub mod url_state;
