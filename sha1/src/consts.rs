pub(crate) const STATE_LEN: usize = 5;
pub(crate) const BLOCK_LEN: usize = 64;

pub(crate) const H0: [u32; STATE_LEN] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

pub(crate) const K: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];
