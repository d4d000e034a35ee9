use bstr::BString;

/// Pads trailing whitespaces up to `width`. Longer keys are kept whole.
pub(crate) fn column_pad(key: &[u8], width: usize) -> BString {
    let mut data = key.to_vec();
    if data.len() < width {
        data.resize(width, b' ');
    }
    BString::new(data)
}

/// Drops control bytes up to 13 (`\r`) and optionally lowercases ASCII.
pub(crate) fn filter_control(data: &[u8], lowercase: bool) -> impl Iterator<Item = u8> + '_ {
    data.iter()
        .map(move |&b| if lowercase { b.to_ascii_lowercase() } else { b })
        .filter(|&b| b > 13)
}
