//! Contract interfaces generated via alloy's sol! macro.

use alloy::sol;

sol! {
    // Subset of the Uniswap V2 pair interface; the pair contract is its own LP token.
    #[sol(rpc)]
    interface IUniswapV2Pair {
        function totalSupply() external view returns (uint256);
    }
}
