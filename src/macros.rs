macro_rules! invalid_format {
    ($s:expr) => {
        $crate::types::Error::InvalidFormat($s.into())
    };
    ($fmt:expr, $($args:tt)*) => {
        $crate::types::Error::InvalidFormat(format!($fmt, $($args)*).into())
    }
}

macro_rules! unexpected_eof {
    () => {
        $crate::types::Error::UnexpectedEndOfFile(None)
    };
    ($s:expr) => {
        $crate::types::Error::UnexpectedEndOfFile(Some($s.into()))
    };
    ($fmt:expr, $($args:tt)*) => {
        $crate::types::Error::UnexpectedEndOfFile(Some(format!($fmt, $($args)*).into()))
    }
}

macro_rules! if_eof {
    ($s:expr) => {
        |e: ::std::io::Error| match e.kind() {
            ::std::io::ErrorKind::UnexpectedEof => unexpected_eof!($s),
            _ => $crate::types::Error::from(e)
        }
    };
    ($fmt:expr, $($args:tt)*) => {
        |e: ::std::io::Error| match e.kind() {
            ::std::io::ErrorKind::UnexpectedEof => unexpected_eof!($fmt, $($args)*),
            _ => $crate::types::Error::from(e)
        }
    }
}
