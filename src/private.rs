//! Sealing for the public representation and mode traits.
//!
//! `Data`, `DataMut` and `Mode` are public because they appear as bounds on
//! public methods, but only the types in this crate may implement them.

/// Public but not publicly reachable, so third parties can't name it and
/// can't implement traits requiring it.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// This trait is private to implement; this method exists to make it
        /// impossible to implement outside the crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
