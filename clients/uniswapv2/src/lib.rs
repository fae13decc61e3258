mod contracts;
mod pair_reader;

pub use pair_reader::UniswapV2PairReader;
