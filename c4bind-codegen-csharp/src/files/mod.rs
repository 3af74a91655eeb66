mod native_cs;

pub use native_cs::NativeCs;
