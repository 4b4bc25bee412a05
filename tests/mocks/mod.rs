pub mod mock_lookup;

#[allow(unused_imports)]
pub use mock_lookup::{MockAddressLookup, MockCompanyRegistry};
