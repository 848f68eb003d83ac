use clap::Args;

pub mod bound;
pub mod emit;
pub mod error;
pub mod sequence;

pub use bound::Bound;
pub use emit::{print_fibonacci, render_fibonacci, write_fibonacci};
pub use error::FibError;
pub use sequence::{fibonacci_below, Fibonacci, Term};

#[derive(Args, Debug)]
pub struct EmitArgs {
    #[arg(
        help = "Exclusive upper limit; integers, decimals or inf, non-positive values print an empty line",
        default_value_t = Bound::DEFAULT,
        allow_hyphen_values = true
    )]
    pub bound: Bound,
}
