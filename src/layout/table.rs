use super::KeyPair;

/// QWERTY → Dvorak, by key position. Rows run top to bottom, left to right;
/// emitted match arms follow this order.
#[rustfmt::skip]
pub const DVORAK_TABLE: [KeyPair; 35] = [
    KeyPair::new('q', '\''), KeyPair::new('w', ','), KeyPair::new('e', '.'),
    KeyPair::new('r', 'p'),  KeyPair::new('t', 'y'), KeyPair::new('y', 'f'),
    KeyPair::new('u', 'g'),  KeyPair::new('i', 'c'), KeyPair::new('o', 'r'),
    KeyPair::new('p', 'l'),  KeyPair::new('[', '/'), KeyPair::new(']', '='),

    KeyPair::new('a', 'a'),  KeyPair::new('s', 'o'), KeyPair::new('d', 'e'),
    KeyPair::new('f', 'u'),  KeyPair::new('g', 'i'), KeyPair::new('h', 'd'),
    KeyPair::new('j', 'h'),  KeyPair::new('k', 't'), KeyPair::new('l', 'n'),
    KeyPair::new(';', 's'),  KeyPair::new('\'', '-'),

    KeyPair::new('z', ';'),  KeyPair::new('x', 'q'), KeyPair::new('c', 'j'),
    KeyPair::new('v', 'k'),  KeyPair::new('b', 'x'), KeyPair::new('n', 'b'),
    KeyPair::new('m', 'm'),  KeyPair::new(',', 'w'), KeyPair::new('.', 'v'),
    KeyPair::new('/', 'z'),

    KeyPair::new('-', '['),  KeyPair::new('=', ']'),
];
