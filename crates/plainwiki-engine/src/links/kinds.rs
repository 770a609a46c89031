pub struct BracketLink;

impl BracketLink {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    /// Path prefix the rewritten anchor points at
    pub const VIEW_PREFIX: &'static str = "/view/";

    /// Only letters may appear between the brackets
    pub fn is_target_byte(b: u8) -> bool {
        b.is_ascii_alphabetic()
    }
}
