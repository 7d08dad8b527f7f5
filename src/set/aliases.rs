//! Named set types for each supported scalar.

use super::OrderedSet;

macro_rules! define_set_aliases {
    ($($name:ident => $element:ty),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("An [`OrderedSet`] of `", stringify!($element), "` elements.")]
                pub type [<$name Set>] = OrderedSet<$element>;
            )*
        }
    };
}

define_set_aliases! {
    Int8 => i8,
    Int16 => i16,
    Int32 => i32,
    Int64 => i64,
    Int => isize,
    Uint8 => u8,
    Uint16 => u16,
    Uint32 => u32,
    Uint64 => u64,
    Uint => usize,
    Float32 => f32,
    Float64 => f64,
    String => String,
}
