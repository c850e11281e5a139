//! Well models.
//!
//! Models are the consumers of the closure library: they own a configured set
//! of closures and invoke them at every node of every nonlinear iteration.
//!
//! # Model structure
//!
//! Each model lives in its own module and implements the
//! [`Well`](crate::support::well::Well) contract. Internal solve machinery
//! (residuals, [`twine_core::Model`] adapters) stays private to the model.

pub mod wellbore;
