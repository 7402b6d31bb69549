//! The prelude

#[doc(inline)]
pub use crate::record::Record;
#[doc(inline)]
pub use crate::settings::{Settings, Tri};
#[doc(inline)]
pub use crate::util::{err, Error, Result};

#[doc(inline)]
pub use std::cmp::Ordering;
#[doc(inline)]
pub use std::io::{Read, Write};
#[doc(inline)]
pub use std::str::FromStr;
