//! Named input documents shared by unit tests (same files as `tests/fixtures/`).

pub const NETWORK_IPV4: &str = include_str!("../../tests/fixtures/network/ipv4.yaml");
pub const NETWORK_DUAL_STACK: &str = include_str!("../../tests/fixtures/network/dual_stack.yaml");
pub const NETWORK_DUAL_STACK_SWAPPED: &str =
    include_str!("../../tests/fixtures/network/dual_stack_swapped.yaml");
pub const NETWORK_IPV6_SINGLE_STACK: &str =
    include_str!("../../tests/fixtures/network/ipv6_single_stack.yaml");
pub const NETWORK_EMPTY: &str = include_str!("../../tests/fixtures/network/empty.yaml");
pub const NETWORK_INVALID_CIDR: &str =
    include_str!("../../tests/fixtures/network/invalid_cidr.yaml");
pub const NETWORK_MALFORMED: &str = include_str!("../../tests/fixtures/network/malformed.yaml");

pub const INFRA_AWS: &str = include_str!("../../tests/fixtures/infrastructure/aws.yaml");
pub const INFRA_EMPTY_PLATFORM: &str =
    include_str!("../../tests/fixtures/infrastructure/empty_platform.yaml");
pub const INFRA_NO_STATUS: &str = include_str!("../../tests/fixtures/infrastructure/no_status.yaml");
pub const INFRA_MALFORMED: &str = include_str!("../../tests/fixtures/infrastructure/malformed.yaml");
