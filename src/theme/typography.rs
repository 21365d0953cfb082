//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 11.0;
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_BASE: f32 = 14.0;
    pub const TEXT_LG: f32 = 18.0;
}
