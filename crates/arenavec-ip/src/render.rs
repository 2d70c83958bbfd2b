//! Dot-separated rendering of integers, strings, sequences and tuples.
//!
//! - Integers render their big-endian bytes as unsigned decimals:
//!   `-1i8` is `255`, `2_130_706_433i32` is `127.0.0.1`.
//! - Strings render verbatim.
//! - `Vec` and `LinkedList` render their elements joined by `.`.
//! - Tuples render their elements joined by `.`, but only when every element
//!   has the same type; `(1, "a")` does not implement [`RenderIp`].

use std::collections::LinkedList;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// A value with a dot-separated textual form.
pub trait RenderIp {
    /// The dot-separated form of `self`.
    fn render_ip(&self) -> String;
}

/// Write the rendering of `value` followed by a newline.
pub fn write_ip<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write,
    T: RenderIp + ?Sized,
{
    writeln!(out, "{}", value.render_ip())
}

/// Print the rendering of `value` on its own line to stdout.
pub fn print_ip<T: RenderIp + ?Sized>(value: &T) -> io::Result<()> {
    write_ip(&mut io::stdout().lock(), value)
}

fn join_displayed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        let _ = write!(out, "{item}");
    }
    out
}

macro_rules! integral {
    ($($ty:ty),+) => {
        $(
            impl RenderIp for $ty {
                fn render_ip(&self) -> String {
                    join_displayed(self.to_be_bytes())
                }
            }
        )+
    };
}

integral!(i8, i16, i32, i64, u8, u16, u32, u64);

impl RenderIp for str {
    fn render_ip(&self) -> String {
        self.to_string()
    }
}

impl RenderIp for String {
    fn render_ip(&self) -> String {
        self.clone()
    }
}

impl<T: fmt::Display> RenderIp for Vec<T> {
    fn render_ip(&self) -> String {
        join_displayed(self)
    }
}

impl<T: fmt::Display> RenderIp for LinkedList<T> {
    fn render_ip(&self) -> String {
        join_displayed(self)
    }
}

macro_rules! homogeneous_tuple {
    (@elem $idx:tt) => { T };
    ($($idx:tt),+) => {
        impl<T: fmt::Display> RenderIp for ($(homogeneous_tuple!(@elem $idx),)+) {
            fn render_ip(&self) -> String {
                join_displayed([$(&self.$idx),+])
            }
        }
    };
}

homogeneous_tuple!(0);
homogeneous_tuple!(0, 1);
homogeneous_tuple!(0, 1, 2);
homogeneous_tuple!(0, 1, 2, 3);
homogeneous_tuple!(0, 1, 2, 3, 4);
homogeneous_tuple!(0, 1, 2, 3, 4, 5);
homogeneous_tuple!(0, 1, 2, 3, 4, 5, 6);
homogeneous_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
