//! Bitcoin network definitions and the version-byte table.

use serde::{Serialize, Serializer};

/// Version byte of mainnet P2PKH addresses (start with `1`).
pub const MAINNET_P2PKH: u8 = 0x00;
/// Version byte of mainnet P2SH addresses (start with `3`).
pub const MAINNET_P2SH: u8 = 0x05;
/// Version byte of testnet P2PKH addresses (start with `m` or `n`).
pub const TESTNET_P2PKH: u8 = 0x6f;
/// Version byte of testnet P2SH addresses (start with `2`).
pub const TESTNET_P2SH: u8 = 0xc4;

/// Bitcoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet
    Mainnet,
    /// Bitcoin testnet
    Testnet,
    /// Version byte not in the table
    Unknown,
}

impl Network {
    /// Get the version byte for P2PKH addresses, if the network has one.
    pub fn p2pkh_version(&self) -> Option<u8> {
        match self {
            Network::Mainnet => Some(MAINNET_P2PKH),
            Network::Testnet => Some(TESTNET_P2PKH),
            Network::Unknown => None,
        }
    }

    /// Get the version byte for P2SH addresses, if the network has one.
    pub fn p2sh_version(&self) -> Option<u8> {
        match self {
            Network::Mainnet => Some(MAINNET_P2SH),
            Network::Testnet => Some(TESTNET_P2SH),
            Network::Unknown => None,
        }
    }

    /// Parse network from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Some(Network::Mainnet),
            "testnet" | "test" | "testnet3" => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Base58Check address format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// Pay to Public Key Hash
    P2pkh,
    /// Pay to Script Hash
    P2sh,
    /// Version byte not in the table
    Unknown,
}

impl AddressFormat {
    pub fn name(&self) -> &'static str {
        match self {
            AddressFormat::P2pkh => "p2pkh",
            AddressFormat::P2sh => "p2sh",
            AddressFormat::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Combined network/format label, e.g. `mainnet_p2pkh`.
///
/// Unrecognized version bytes keep the raw byte and render as `unknown_0x%02x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    MainnetP2pkh,
    MainnetP2sh,
    TestnetP2pkh,
    TestnetP2sh,
    Unknown(u8),
}

impl core::fmt::Display for AddressType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressType::MainnetP2pkh => write!(f, "mainnet_p2pkh"),
            AddressType::MainnetP2sh => write!(f, "mainnet_p2sh"),
            AddressType::TestnetP2pkh => write!(f, "testnet_p2pkh"),
            AddressType::TestnetP2sh => write!(f, "testnet_p2sh"),
            AddressType::Unknown(byte) => write!(f, "unknown_0x{:02x}", byte),
        }
    }
}

impl Serialize for AddressType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What a version byte says about an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub network: Network,
    pub format: AddressFormat,
    pub address_type: AddressType,
}

impl Classification {
    /// Whether the version byte was one of the four known values.
    pub fn is_recognized(&self) -> bool {
        !matches!(self.address_type, AddressType::Unknown(_))
    }
}

/// Classify a version byte. Total over all 256 values.
pub fn classify(version_byte: u8) -> Classification {
    let (network, format, address_type) = match version_byte {
        MAINNET_P2PKH => (Network::Mainnet, AddressFormat::P2pkh, AddressType::MainnetP2pkh),
        MAINNET_P2SH => (Network::Mainnet, AddressFormat::P2sh, AddressType::MainnetP2sh),
        TESTNET_P2PKH => (Network::Testnet, AddressFormat::P2pkh, AddressType::TestnetP2pkh),
        TESTNET_P2SH => (Network::Testnet, AddressFormat::P2sh, AddressType::TestnetP2sh),
        other => (Network::Unknown, AddressFormat::Unknown, AddressType::Unknown(other)),
    };

    Classification {
        network,
        format,
        address_type,
    }
}
