// Basis-set data model and text formats for quantum-chemistry programs

pub mod basis;
pub mod cgto;
pub mod element;
pub mod error;
pub mod format_impl;
mod helper;

pub use basis::{BasisFormat, DumpOptions};
pub use cgto::{AtomBasis, BasisSetDocument, Contraction, Ecp, EcpRadialPart};
pub use element::{Element, ElementTable};
pub use error::{BasisError, Dumped, Location, Result, Warning};
