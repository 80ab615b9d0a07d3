// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronassert_error::AssertionError;

/// Unwraps the message of an assertion failure, panicking on anything else.
pub fn expect_failure<S>(result: Result<S, AssertionError>) -> String {
    match result {
        Err(AssertionError::Failure { message }) => message,
        Err(other) => panic!("Expected assertion failure but got: {other:?}"),
        Ok(_) => panic!("Expected assertion failure but the assertion passed"),
    }
}

/// Unwraps the message of an illegal argument error, panicking on anything else.
pub fn expect_illegal_argument<S>(result: Result<S, AssertionError>) -> String {
    match result {
        Err(AssertionError::IllegalArgument { message }) => message,
        Err(other) => panic!("Expected illegal argument but got: {other:?}"),
        Ok(_) => panic!("Expected illegal argument but the assertion passed"),
    }
}

/// Unwraps a parse error, panicking on anything else.
pub fn expect_parse_error<S>(result: Result<S, AssertionError>) -> AssertionError {
    match result {
        Err(err @ AssertionError::Parse { .. }) => err,
        Err(other) => panic!("Expected parse error but got: {other:?}"),
        Ok(_) => panic!("Expected parse error but the assertion passed"),
    }
}

/// Panics unless `result` failed because the actual value was absent.
pub fn expect_null_actual<S>(result: Result<S, AssertionError>) {
    match result {
        Err(AssertionError::NullActual) => {}
        Err(other) => panic!("Expected null actual but got: {other:?}"),
        Ok(_) => panic!("Expected null actual but the assertion passed"),
    }
}
