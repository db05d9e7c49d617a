//! State-management patterns
//!
//! Each screen shows one way to own and pass state between widgets: local
//! fields, a mutable borrow handed to a child, a store read by several panes,
//! values computed from other state, and an injected environment.

pub mod binding;
pub mod derived;
pub mod environment;
pub mod local;
pub mod shared_store;

pub use binding::BindingDemo;
pub use derived::DerivedStateDemo;
pub use environment::EnvironmentDemo;
pub use local::LocalStateDemo;
pub use shared_store::SharedStoreDemo;
