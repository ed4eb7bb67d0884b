// SPDX-License-Identifier: Apache-2.0

//! Compile-time configuration validation

// The digit loop indexes positions with small signed integers and the
// scientific form needs room for sign, 7 digits, point, `e` and exponent.
#[cfg(feature = "float")]
const _: () = {
    assert!(
        crate::ftoa::FTOA_BUFFER_SIZE >= 16,
        "FTOA_BUFFER_SIZE must leave room for the longest scientific form"
    );
    assert!(
        crate::ftoa::FTOA_BUFFER_SIZE <= 127,
        "FTOA_BUFFER_SIZE must fit the signed digit counters"
    );
};
