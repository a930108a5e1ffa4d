//! Auto-assignment palette
//!
//! Ordered list of visually distinct colors handed out to entities and
//! severity levels that don't specify one. Entries are uppercase hex so they
//! compare directly against color dedup keys.

pub const PALETTE: [&str; 57] = [
    "#4269D0", "#F4BD4A", "#FF725C", "#6CC5B0", "#A463F2", "#FF8AB7", "#9C6B4E", "#97BBF5",
    "#01AB63", "#9498A0", "#094BAD", "#C99000", "#D84F3E", "#49A28F", "#048732", "#D96895",
    "#8043CE", "#7599D1", "#7A4C31", "#74787F", "#6989F4", "#FFD444", "#FF957C", "#8FE9D3",
    "#62CC71", "#FFADDA", "#C884FF", "#BADEFF", "#BF8B6D", "#B6BAC2", "#927ACC", "#97EE3F",
    "#BF3947", "#9F5B00", "#F48758", "#8CAED6", "#F2B94F", "#EFF26E", "#E43872", "#D9B100",
    "#9D7A00", "#698CFF", "#D9D9D9", "#00D27E", "#D06800", "#009F82", "#C49200", "#CBE8FF",
    "#FECDDF", "#C27EB6", "#8CD2CE", "#C4B8D9", "#F883B0", "#A49100", "#F48800", "#27D0DF",
    "#A04A9B",
];

/// Palette entry by position, wrapping around past the end
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
