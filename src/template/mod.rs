//! Declarative resource graph emitted by the composition pass.
//!
//! The graph is a CloudFormation-style template: an ordered set of resources
//! keyed by logical ID, optional parameters, and intrinsic expressions that
//! wire resources to each other. Nothing here talks to a cloud provider; the
//! serialized template is handed to a separate deployment mechanism.

pub mod intrinsic;
pub mod logical_id;
mod model;
pub mod resources;


pub use intrinsic::Expr;
pub use logical_id::{ConstructPath, logical_id};
pub use model::{Parameter, Resource, TEMPLATE_FORMAT_VERSION, Template};
