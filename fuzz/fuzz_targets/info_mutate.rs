#![no_main]
use icy_infostring::InfoString;
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

#[derive(Arbitrary, Debug)]
enum Op {
    Set(Vec<u8>, Vec<u8>),
    SetStar(Vec<u8>, Vec<u8>),
    Remove(Vec<u8>),
    RemovePrefixed(u8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    max_size: u8,
    initial: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let max_size = input.max_size as usize;
    let Ok(mut info) = InfoString::from_bytes(&input.initial, max_size) else {
        return;
    };
    for op in input.ops {
        match op {
            Op::Set(key, value) => {
                info.set_value_for_key(key, value);
            }
            Op::SetStar(key, value) => {
                info.set_value_for_star_key(key, value);
            }
            Op::Remove(key) => {
                info.remove_key(key);
            }
            Op::RemovePrefixed(prefix) => info.remove_prefixed_keys(prefix),
        }
        assert!(info.len() <= max_size);
    }
});
