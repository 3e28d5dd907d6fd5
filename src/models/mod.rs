pub mod enums;
pub mod record;
pub mod value;

pub use enums::{ExcessDeficiency, HotCold, InteriorExterior, YinYang};
pub use record::{ChiefComplaint, ClinicalRecord, ClinicalRecordBuilder, RecordError};
pub use value::FieldValue;
