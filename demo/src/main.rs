use std::fmt::Display;
use std::io::Write;

use unpack::{apply, Tuple};

/// Writes each argument followed by a space.
fn print3<W: Write>(
    out: &mut W,
) -> impl FnOnce(&dyn Display, &dyn Display, &dyn Display) -> std::io::Result<()> + '_ {
    move |a, b, c| write!(out, "{a} {b} {c} ")
}

fn arity_of<T: Tuple>(_: &T) -> usize {
    T::ARITY
}

#[allow(clippy::approx_constant)]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let t = (3.14, 42, "hello world");
    let arity = arity_of(&t);
    log::info!("applying printer to a tuple of arity {arity}");
    log::debug!("indices {:?}", common::build_index_sequence(arity).as_slice());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let print = print3(&mut out);
    apply(|a: &f64, b: &i32, c: &&str| print(a, b, c), &t)?;
    writeln!(out)?;

    Ok(())
}
