//! Bindings for the mintable token contract.

use alloy::sol;

sol! {
    /// Owner-gated token collection.
    ///
    /// Only the functions the mint tool needs are declared.
    #[derive(Debug, PartialEq, Eq)]
    #[sol(rpc)]
    interface IMintableToken {
        /// Mint `amount` tokens to `to`. Reverts unless called by the owner.
        function mint(address to, int256 amount) external;

        function totalSupply() external view returns (uint256);

        function balanceOf(address owner) external view returns (uint256);

        function name() external view returns (string);

        function symbol() external view returns (string);

        /// Address allowed to mint.
        function owner() external view returns (address);
    }
}
