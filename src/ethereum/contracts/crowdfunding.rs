//! CrowdFunding contract bindings.

use alloy::sol;

pub use crate::ethereum::constants::CROWDFUNDING_CONTRACT;

// CrowdFunding campaign registry interface
sol! {
    #[sol(rpc)]
    contract CrowdFunding {
        struct Campaign {
            address owner;
            string title;
            string description;
            uint256 target;
            uint256 deadline;
            uint256 amountCollected;
            string image;
            address[] donators;
            uint256[] donations;
        }

        function createCampaign(
            address owner,
            string memory title,
            string memory description,
            uint256 target,
            uint256 deadline,
            string memory image
        ) public returns (uint256);

        function donateToCampaign(uint256 id) public payable;

        function getDonators(uint256 id)
            public
            view
            returns (address[] memory, uint256[] memory);

        function getCampaigns() public view returns (Campaign[] memory);
    }
}
