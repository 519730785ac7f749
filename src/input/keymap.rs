use derive_more::Display;

/// Physical key position, numbered like USB HID usage ids
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scancode(pub u16);

/// Expands to the [`Scancode`] constant for a key name, `key!(A)`, `key!(ESCAPE)`, `key!(DIGIT_1)`
#[macro_export]
macro_rules! key {
    ($name:ident) => {
        $crate::input::Scancode::$name
    };
}

impl Scancode
{
    pub const A: Scancode = Scancode(4);
    pub const B: Scancode = Scancode(5);
    pub const C: Scancode = Scancode(6);
    pub const D: Scancode = Scancode(7);
    pub const E: Scancode = Scancode(8);
    pub const F: Scancode = Scancode(9);
    pub const G: Scancode = Scancode(10);
    pub const H: Scancode = Scancode(11);
    pub const I: Scancode = Scancode(12);
    pub const J: Scancode = Scancode(13);
    pub const K: Scancode = Scancode(14);
    pub const L: Scancode = Scancode(15);
    pub const M: Scancode = Scancode(16);
    pub const N: Scancode = Scancode(17);
    pub const O: Scancode = Scancode(18);
    pub const P: Scancode = Scancode(19);
    pub const Q: Scancode = Scancode(20);
    pub const R: Scancode = Scancode(21);
    pub const S: Scancode = Scancode(22);
    pub const T: Scancode = Scancode(23);
    pub const U: Scancode = Scancode(24);
    pub const V: Scancode = Scancode(25);
    pub const W: Scancode = Scancode(26);
    pub const X: Scancode = Scancode(27);
    pub const Y: Scancode = Scancode(28);
    pub const Z: Scancode = Scancode(29);

    pub const DIGIT_1: Scancode = Scancode(30);
    pub const DIGIT_2: Scancode = Scancode(31);
    pub const DIGIT_3: Scancode = Scancode(32);
    pub const DIGIT_4: Scancode = Scancode(33);
    pub const DIGIT_5: Scancode = Scancode(34);
    pub const DIGIT_6: Scancode = Scancode(35);
    pub const DIGIT_7: Scancode = Scancode(36);
    pub const DIGIT_8: Scancode = Scancode(37);
    pub const DIGIT_9: Scancode = Scancode(38);
    pub const DIGIT_0: Scancode = Scancode(39);

    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const BACKSPACE: Scancode = Scancode(42);
    pub const TAB: Scancode = Scancode(43);
    pub const SPACE: Scancode = Scancode(44);
    pub const EQUALS: Scancode = Scancode(46);
    pub const CAPSLOCK: Scancode = Scancode(57);
    pub const DELETE: Scancode = Scancode(76);
    pub const END: Scancode = Scancode(77);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);
    pub const CANCEL: Scancode = Scancode(155);

    pub fn index(self) -> usize { usize::from(self.0) }
}

/// Key under `character` on a QWERTY layout, letters are case insensitive
pub fn scancode_for(character: char) -> Option<Scancode>
{
    let offset = |first: char| (character as u32 - first as u32) as u16;
    match character {
        'a'..='z' => Some(Scancode(Scancode::A.0 + offset('a'))),
        'A'..='Z' => Some(Scancode(Scancode::A.0 + offset('A'))),
        '1'..='9' => Some(Scancode(Scancode::DIGIT_1.0 + offset('1'))),
        '0' => Some(Scancode::DIGIT_0),
        _ => None,
    }
}
