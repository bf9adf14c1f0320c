use clap::Parser;
use math_sparse_bcsr::{BcsrMatrix, CooMatrix, Result};

/// CLI arguments for the BCSR conversion demo
#[derive(Parser)]
#[command(name = "bcsr_demo")]
#[command(about = "Convert a sample COO matrix to BCSR and print the block structure")]
struct Args {
    /// Block size used for the conversion
    #[arg(short, long, default_value = "2")]
    block_size: usize,

    /// Print the reconstructed dense matrix as well
    #[arg(short, long)]
    dense: bool,
}

/// The 6x6 sample matrix with 10 non-zeros
fn sample_matrix() -> Result<CooMatrix> {
    CooMatrix::from_parts(
        6,
        6,
        vec![0, 0, 1, 1, 2, 2, 2, 3, 4, 4],
        vec![0, 1, 2, 4, 0, 3, 4, 3, 1, 2],
        vec![0.1, 0.2, 0.3, 0.5, 0.1, 0.4, 0.5, 0.4, 0.2, 0.3],
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    let coo = sample_matrix()?;
    let bcsr = BcsrMatrix::from_coo(&coo, args.block_size)?;

    println!("{bcsr}");

    if args.dense {
        println!("\ndense = {:.1}", bcsr.to_dense());
    }

    Ok(())
}
