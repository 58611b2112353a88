//! Integration test framework for graphdoc.
//!
//! A [`Scenario`] renders pages of a schema (the example schema unless told
//! otherwise) and checks each against a [`PageAssertion`]:
//!
//! ```ignore
//! Scenario::new("business")
//!     .field("Test.business", |a| a.constraints(["XOR(name, street)"]))
//!     .run()
//!     .unwrap();
//! ```

mod assertion;
mod error;
mod scenario;

pub use assertion::PageAssertion;
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Page, Scenario};

pub mod prelude {
    pub use crate::{Page, PageAssertion, Scenario, ScenarioError, ScenarioResult};
    pub use graphdoc_example::example_schema;
    pub use graphdoc_render::{class, DocRenderer, Fragment, RenderConfig};
}
