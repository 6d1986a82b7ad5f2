pub mod document;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod objects;
pub mod writer;

pub use document::PdfDocument;
pub use error::{PdfError, Result};
pub use fonts::{BuiltinFont, FontMetrics, TextStyle};
pub use layout::{wrap_text, CellMove, Layout, PageSize, TextAlign, Unit};
