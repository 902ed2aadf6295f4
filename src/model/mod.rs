//! The data model (§3): [`Variable`] (C3/C4 shared record), [`Call`],
//! [`MethodModel`] (C3), and [`ClassModel`] (C4).

mod call;
mod class;
mod method;
mod variable;

pub use call::Call;
pub use class::{ClassCollection, ClassKind, ClassModel};
pub use method::MethodModel;
pub use variable::Variable;
