use crate::error::SheetsError;

/// Letter label for a 1-based column index.
///
/// Base-26 encoding with digit values 1-26 rather than 0-25, so there is no
/// zero digit: 1 -> "A", 26 -> "Z", 27 -> "AA", 703 -> "AAA". Defined for
/// indices >= 1; generated labels are always uppercase.
pub fn column_label(index: usize) -> String {
    let mut remaining = index;
    let mut label = String::new();
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        label.insert(0, (b'A' + digit as u8) as char);
        remaining = (remaining - 1) / 26;
    }
    label
}

/// 1-based column index for a letter label, the inverse of [`column_label`].
///
/// Case-insensitive; an empty label or any character outside A-Z fails with
/// `InvalidLabel`.
pub fn column_index(label: &str) -> Result<usize, SheetsError> {
    if label.is_empty() {
        return Err(SheetsError::InvalidLabel {
            label: String::new(),
        });
    }

    let mut index = 0usize;
    for character in label.chars() {
        if !character.is_ascii_alphabetic() {
            return Err(SheetsError::InvalidLabel {
                label: label.to_owned(),
            });
        }
        let value = character.to_ascii_uppercase() as usize - 'A' as usize + 1;
        index = index.saturating_mul(26) + value;
    }

    Ok(index)
}
