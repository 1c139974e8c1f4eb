#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::chain::ChainOp;
use crate::fp::FpParam;
use crate::glv::Lattice;
use crypto_bigint::Word;
use std::sync::OnceLock;

/// The sextic twist type of a curve, which fixes where line coefficients land in the target field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Twist {
    /// Divisive twist: <i>E'</i>: <i>y&sup2; = x&sup3; + b/v</i>.
    D,
    /// Multiplicative twist: <i>E'</i>: <i>y&sup2; = x&sup3; + b&middot;v</i>.
    M,
}

/// Constants of a BLS24 curve <i>E</i>: <i>y&sup2; = x&sup3; + b</i> over <b>F</b><sub><i>p</i></sub>
/// with <i>p = (x - 1)&sup2;(x&#x2078; - x&#x2074; + 1)/3 + x</i> and <i>r = x&#x2078; - x&#x2074; + 1</i>,
/// together with its sextic twist <i>E'</i> over <b>F</b><sub><i>p&#x2074;</i></sub>.
///
/// Multi-word constants are little-endian word tables in plain (non-Montgomery) form.
/// Extension field constants list their prime field coordinates in tower order,
/// least significant component first.
pub trait BLS24Param: FpParam {
    const SEED: i64;
    const ORDER: &'static [Word];
    const XI: [i64; 2];
    const CURVE_B: Word;
    const TWIST: Twist;
    /// Coefficient <i>b'</i> of the twist, as four prime field coordinates.
    const TWIST_B: &'static [Word];
    const P_MOD_12: usize;
    /// Frobenius coefficients for the twelve <b>F</b><sub><i>p&sup2;</i></sub> slots of <b>F</b><sub><i>p&sup2;&#x2074;</i></sub>.
    const FROB_1: &'static [Word];
    const FROB_2: &'static [Word];
    const FROB_4: &'static [Word];
    /// Signed digits of the optimal ate loop, least significant first.
    const ATE_LOOP: &'static [i8];
    const OMEGA: &'static [Word];
    const LAMBDA: &'static [Word];
    const G1_X: &'static [Word];
    const G1_Y: &'static [Word];
    const G2_X: &'static [Word];
    const G2_Y: &'static [Word];
    /// Addition chain for <i>f &#x21A6; f&#x02E3;</i> on the cyclotomic subgroup.
    const EXPT: &'static [ChainOp];

    /// The GLV lattice basis for <i>(r, &lambda;)</i>, computed once per process.
    fn glv_lattice() -> &'static Lattice;
}

#[derive(Clone, Copy, Debug)]
pub struct BLS24315Param;

impl FpParam for BLS24315Param {
    const LIMBS: usize = 5;
    const MODULUS: &'static [Word] = &[  // base field modulus
        0x6FE802FF40300001,
        0x421EE5DA52BDE502,
        0xDEC1D01AA27A1AE0,
        0xD3F7498BE97C5EAF,
        0x04C23A02B586D650,
        // p = 39705142709513438335025689890408969744933502416914749335064285505637884093126342347073617133569: 315 bits
    ];
    const NEG_INV_MOD: &'static [Word] = &[  // -1/p mod 2^(64*LIMBS)
        0x702FF9FF402FFFFF,
        0x34B4E2083DF7DE42,
        0x784A516BB53BADFB,
        0x4ECBE935DDB76276,
        0xFE6866B2867E3F8E,
    ];
    const MONTY_P: &'static [Word] = &[  // (2^(64*LIMBS))^2 mod p
        0x6B817891FE329C16,
        0x599CE86EEC6E2C35,
        0xC338890F540D5AD6,
        0xCC160F6924C81F32,
        0x0215D8D4607A88D5,
    ];
    const NON_RESIDUE: i64 = 13;  // F_p2 = F_p[u]/<u^2 - β>
}

impl BLS24Param for BLS24315Param {
    const SEED: i64 = -3218079743;  // x
    const ORDER: &'static [Word] = &[  // prime group order r = x^8 - x^4 + 1
        0x19D0C5FD00C00001,
        0xC8C480ECE644E364,
        0x25FC7EC9CF927A98,
        0x196DEAC24A9DA12B,
        0x0000000000000000,
        // r = 11502027791375260645628074404575422495959608200132055716665986169834464870401: 253 bits
    ];
    const XI: [i64; 2] = [0, 1];  // F_p4 = F_p2[v]/<v^2 - ξ>, ξ = XI[0] + XI[1]*u
    const CURVE_B: Word = 1;  // E: y^2 = x^3 + b
    const TWIST: Twist = Twist::D;
    const TWIST_B: &'static [Word] = &[  // E': y^2 = x^3 + b' over F_p4, b' = b/v
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x875EC56258A4EC4F, 0x453FD497BDF5D476, 0x49A7A9DCB688F071, 0x5BAFE3EE23EBBFCC, 0x00BB6B62E0D9AAD1,
    ];
    const P_MOD_12: usize = 1;
    const FROB_1: &'static [Word] = &[  // ξ^((k*p^1 - (k*p^1 mod 12))/12) for k in 0..12
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x61672FB81F212D3F, 0x475FC109BD91A744, 0xAFAD3A6215E415BC, 0x93E2363A80D6A10B, 0x04854EBF5FAA94B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x2105ABCE40A4D358, 0xAF52AF8B21DFBE6C, 0x344E0E113A8D3A59, 0xAEFE88FEBC1499C6, 0x0216DE4D3BAC0119,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x04740A749FD73AD7, 0xDA207E627311F301, 0x0182510CCC40CCFA, 0x6F263D8D2C1194DF, 0x01970A012939D18F,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600003, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xEDB46FD4589220F3, 0x7B3AEF9CB4FE7E44, 0xC482573EAD8A1CDA, 0x501F0698DF50DC3C, 0x033D738DD83A10E8,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFC72846832E1249F, 0xFFA03FD1CCF1EA8E, 0x3E36EC0AB6159C17, 0xC3ADB4523880E3DB, 0x01B5B313BF79B66E,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x1471EC78855FA0E1, 0xBFB98759A19E4351, 0xB20F1A03AF56D6F7, 0xDF29EA04FF9EE330, 0x03FF0532877C13DA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600002, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFC35431B79A0F3B5, 0x75FA146D4A2ABC02, 0xF396ECF73A2021FE, 0x903419EA47F699E0, 0x037A5ED12E165286,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4B54DB99326C5148, 0x926C7620FDD01125, 0xE8AAAE141E027C9E, 0xE8A674DF65E8A8C4, 0x04610EC939548BA5,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0FFDE203E588660A, 0xE59908F72E8C5050, 0xB08CC8F6E31609FC, 0x7003AC77D38D4E51, 0x0267FB315E42424B,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ];
    const FROB_2: &'static [Word] = &[  // ξ^((k*p^2 - (k*p^2 mod 12))/12) for k in 0..12
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x2105ABCE40A4D358, 0xAF52AF8B21DFBE6C, 0x344E0E113A8D3A59, 0xAEFE88FEBC1499C6, 0x0216DE4D3BAC0119,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600003, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFC72846832E1249F, 0xFFA03FD1CCF1EA8E, 0x3E36EC0AB6159C17, 0xC3ADB4523880E3DB, 0x01B5B313BF79B66E,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600002, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4B54DB99326C5148, 0x926C7620FDD01125, 0xE8AAAE141E027C9E, 0xE8A674DF65E8A8C4, 0x04610EC939548BA5,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x6FE802FF40300000, 0x421EE5DA52BDE502, 0xDEC1D01AA27A1AE0, 0xD3F7498BE97C5EAF, 0x04C23A02B586D650,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4EE25730FF8B2CA9, 0x92CC364F30DE2696, 0xAA73C20967ECE086, 0x24F8C08D2D67C4E9, 0x02AB5BB579DAD537,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x208FEE00BFCFFFFE, 0xF36333295B4150F8, 0xF52170EB98F15488, 0xE66410D74163012D, 0x00000000130DAB75,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x73757E970D4EDB62, 0x427EA60885CBFA73, 0xA08AE40FEC647EC8, 0x10499539B0FB7AD4, 0x030C86EEF60D1FE2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x208FEE00BFCFFFFF, 0xF36333295B4150F8, 0xF52170EB98F15488, 0xE66410D74163012D, 0x00000000130DAB75,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x249327660DC3AEB9, 0xAFB26FB954EDD3DD, 0xF617220684779E41, 0xEB50D4AC8393B5EA, 0x00612B397C324AAA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ];
    const FROB_4: &'static [Word] = &[  // ξ^((k*p^4 - (k*p^4 mod 12))/12) for k in 0..12
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600003, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600002, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x6FE802FF40300000, 0x421EE5DA52BDE502, 0xDEC1D01AA27A1AE0, 0xD3F7498BE97C5EAF, 0x04C23A02B586D650,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x208FEE00BFCFFFFE, 0xF36333295B4150F8, 0xF52170EB98F15488, 0xE66410D74163012D, 0x00000000130DAB75,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x208FEE00BFCFFFFF, 0xF36333295B4150F8, 0xF52170EB98F15488, 0xE66410D74163012D, 0x00000000130DAB75,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600003, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x4F5814FE80600002, 0x4EBBB2B0F77C940A, 0xE9A05F2F0988C657, 0xED9338B4A8195D81, 0x04C23A02A2792ADA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x6FE802FF40300000, 0x421EE5DA52BDE502, 0xDEC1D01AA27A1AE0, 0xD3F7498BE97C5EAF, 0x04C23A02B586D650,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x208FEE00BFCFFFFE, 0xF36333295B4150F8, 0xF52170EB98F15488, 0xE66410D74163012D, 0x00000000130DAB75,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x208FEE00BFCFFFFF, 0xF36333295B4150F8, 0xF52170EB98F15488, 0xE66410D74163012D, 0x00000000130DAB75,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ];
    const ATE_LOOP: &'static [i8] = &[  // NAF of |x|, least significant digit first
        -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0, 0, 0, 0, -1, 0,
        1,
    ];
    const OMEGA: &'static [Word] = &[  // primitive cube root of unity in F_p
        0x4F5814FE80600002,
        0x4EBBB2B0F77C940A,
        0xE9A05F2F0988C657,
        0xED9338B4A8195D81,
        0x04C23A02A2792ADA,
    ];
    const LAMBDA: &'static [Word] = &[  // eigenvalue of (x, y) -> (ωx, y) on G1, mod r
        0x1E5035FD00C00000,
        0x50AF1E594194AF0A,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
    ];
    const G1_X: &'static [Word] = &[  // default generator of G1
        0xBF4B721710866097,
        0x983603A832CB638D,
        0xF54B344CC46DDE3C,
        0xA1B2B117076EF6E4,
        0x041A0A424393988D,
    ];
    const G1_Y: &'static [Word] = &[
        0x6F2922D5DA4E4E5F,
        0xD3CCE9059E83DFB9,
        0xB5D72C8A29010871,
        0x227ECDF0DB2BB2EB,
        0x02E6F83C55DEFF20,
    ];
    const G2_X: &'static [Word] = &[  // default generator of G2
        0xF5C357CF13710F63, 0x798458F72FF50F96, 0x2A7C5675F5E5E9DA, 0xAEFA14196BFEE255, 0x02F339ADA8942F92,
        0x97838DC4C689911C, 0x9AE503618E928716, 0x1A16ED134A080B75, 0x2B40079BE727CBFD, 0x020B1A8DCA4B1884,
        0x6D5C34E8FFED7536, 0x329B40DB85B47F23, 0x8D5CD69566F9325B, 0xAFFA1BC77400BE68, 0x016EAB1E76670EB9,
        0x9468E07E557D8569, 0xB8B36A6CBBED0A7D, 0xA561B9689A9C03A5, 0x41F2479CA4824DEB, 0x006E8C608261F21C,
    ];
    const G2_Y: &'static [Word] = &[
        0x74CCDCC053B278B7, 0xE600A8502A29681F, 0x399A1D878D5202FA, 0x421C9923CDE33A45, 0x03CDD8218BAA5276,
        0x4ED63AD7F25E398D, 0xDDFA8BD09D57A737, 0x1535E32CE99DA592, 0x9B1BD21E10AAC319, 0x03A079C670190BB4,
        0xA9E7043BBD605EF5, 0x0CD99052005EBF2F, 0xB3B01F45B7C0D299, 0x883A950C631C688E, 0x01B38DD0C5EC49A0,
        0x175A1A104574AC83, 0x1528AB0A80CED619, 0xE01D88643F7E83D3, 0xBE3E1D24DD724163, 0x00495D6DE2E4FED6,
    ];
    const EXPT: &'static [ChainOp] = &[  // f -> f^x on the cyclotomic subgroup
        ChainOp::Square(1, 0, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 8),
        ChainOp::Conj(2, 0),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(1, 1, 2),
        ChainOp::Mul(1, 1, 0),
        ChainOp::SquareCompressed(1, 1, 20),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Conj(1, 1),
    ];

    fn glv_lattice() -> &'static Lattice {
        static LATTICE: OnceLock<Lattice> = OnceLock::new();
        LATTICE.get_or_init(|| Lattice::new(Self::ORDER, Self::LAMBDA))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BLS24317Param;

impl FpParam for BLS24317Param {
    const LIMBS: usize = 5;
    const MODULUS: &'static [Word] = &[  // base field modulus
        0x8D512E565DAB2AAB,
        0xD6F339E43424BF7E,
        0x169A61E684C73446,
        0xF28FC5A0B7F9D039,
        0x1058CA226F60892C,
        // p = 136393071104295911515099765908274057061945112121419593977210139303905973197232025618026156731051: 317 bits
    ];
    const NEG_INV_MOD: &'static [Word] = &[  // -1/p mod 2^(64*LIMBS)
        0x55B5E0028B047FFD,
        0xBB7F0805724F91B9,
        0xEC8486299A5C6CCF,
        0x5521B593FA616990,
        0x3131C88BBCD97906,
    ];
    const MONTY_P: &'static [Word] = &[  // (2^(64*LIMBS))^2 mod p
        0x7196B299EC1F10D4,
        0xA46919EC5B98E13B,
        0x5894530E87ABE576,
        0x3C40E914AC276B0F,
        0x0FE96053F414A2E2,
    ];
    const NON_RESIDUE: i64 = -1;  // F_p2 = F_p[u]/<u^2 - β>
}

impl BLS24Param for BLS24317Param {
    const SEED: i64 = 3640754176;  // x
    const ORDER: &'static [Word] = &[  // prime group order r = x^8 - x^4 + 1
        0xF000000000000001,
        0x1CD1E79196BF0E7A,
        0xD0B097F28D83CD49,
        0x443F917EA68DAFC2,
        0x0000000000000000,
        // r = 30869589236456844204538189757527902584594726589286811523515204428962673459201: 255 bits
    ];
    const XI: [i64; 2] = [1, 1];  // F_p4 = F_p2[v]/<v^2 - ξ>, ξ = XI[0] + XI[1]*u
    const CURVE_B: Word = 4;  // E: y^2 = x^3 + b
    const TWIST: Twist = Twist::M;
    const TWIST_B: &'static [Word] = &[  // E': y^2 = x^3 + b' over F_p4, b' = b*v
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000004, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ];
    const P_MOD_12: usize = 7;
    const FROB_1: &'static [Word] = &[  // ξ^((k*p^1 - (k*p^1 mod 12))/12) for k in 0..12
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x3BDEE071E3AB05DE, 0x2252BD70D7405F94, 0xAE3312771AC3D401, 0xE93444DB33BB6285, 0x0570D2B80DB1F5F1,
        0x51724DE47A0024CD, 0xB4A07C735CE45FEA, 0x68674F6F6A036045, 0x095B80C5843E6DB3, 0x0AE7F76A61AE933B,
        0x3256D0896EEB68DE, 0x1202C904EEFFE876, 0x07D17D1856B862AF, 0xF21421EED004AEBF, 0x032D0496D5249933,
        0x5AFA5DCCEEBFC1CD, 0xC4F070DF4524D708, 0x0EC8E4CE2E0ED197, 0x007BA3B1E7F5217A, 0x0D2BC58B9A3BEFF9,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x07A85116C5E21647, 0x24FE529E68386CB7, 0xBA0B9E02EA595C88, 0x206BE2B2ACC21F27, 0x044B664E455D2FEA,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8001, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0xA6BD42F29EBDEC72, 0x9EE4623B40670EFE, 0x1AFD4A0385ADB25B, 0xA955DD1D9393F17B, 0x0AE9F676A25D170A,
        0xA6BD42F29EBDEC72, 0x9EE4623B40670EFE, 0x1AFD4A0385ADB25B, 0xA955DD1D9393F17B, 0x0AE9F676A25D170A,
        0x61368B04F76BA0F1, 0x8B481BC210FFF373, 0x038C784F00BE974D, 0x9001864F37C436D2, 0x08E8CABBA968A576,
        0x61368B04F76BA0F1, 0x8B481BC210FFF373, 0x038C784F00BE974D, 0x9001864F37C436D2, 0x08E8CABBA968A576,
        0x13A35A25F83326BC, 0x41252E155A29A78F, 0x4515C542A1F58FE5, 0x763DE147BADC4970, 0x02D70D4447E3CD0E,
        0x13A35A25F83326BC, 0x41252E155A29A78F, 0x4515C542A1F58FE5, 0x763DE147BADC4970, 0x02D70D4447E3CD0E,
        0xFE605603A6FE8002, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xAA95EA1C497B8F4A, 0xD487CB8FC7055E28, 0x652BF5283754A42B, 0x3FF4B8B01EAB078F, 0x0003FE18815D079F,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x938D5B8E665709CF, 0x9D4AE4C6FFFFDBE9, 0x0B5DF5675776F9FC, 0x8215A83E07C8E591, 0x0C15CF527E8D3EAA,
        0xF9C3D2C7F75420DC, 0x39A8551D3424E394, 0x0B3C6C7F2D503A4A, 0x707A1D62B030EAA8, 0x0442FACFF0D34A82,
        0x994C37658FFC3B20, 0xF31A155B2615FA56, 0xA1A489263C6367A3, 0x4861C435C613FA81, 0x0EE4711871E72651,
        0xF404F6F0CDAEEF8B, 0xE3D924890E0EC527, 0x74F5D8C04863CCA2, 0xAA2E016AF1E5D5B7, 0x01745909FD7962DB,
    ];
    const FROB_2: &'static [Word] = &[  // ξ^((k*p^2 - (k*p^2 mod 12))/12) for k in 0..12
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8002, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x8EF0D852B6ACAAAA, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAA9, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAAA, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x8D512E565DAB2AAA, 0xD6F339E43424BF7E, 0x169A61E684C73446, 0xF28FC5A0B7F9D039, 0x1058CA226F60892C,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAA9, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0xFE605603A6FE8001, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8D512E565DAB2AAA, 0xD6F339E43424BF7E, 0x169A61E684C73446, 0xF28FC5A0B7F9D039, 0x1058CA226F60892C,
        0xFE605603A6FE8002, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8001, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
    ];
    const FROB_4: &'static [Word] = &[  // ξ^((k*p^4 - (k*p^4 mod 12))/12) for k in 0..12
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAAA, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAA9, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8D512E565DAB2AAA, 0xD6F339E43424BF7E, 0x169A61E684C73446, 0xF28FC5A0B7F9D039, 0x1058CA226F60892C,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8001, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8002, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAAA, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8EF0D852B6ACAAA9, 0x8B741E815D7B0101, 0x11DC161F60EA6DED, 0x09E2664ABF0CB4E7, 0x1058CA223586407A,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x8D512E565DAB2AAA, 0xD6F339E43424BF7E, 0x169A61E684C73446, 0xF28FC5A0B7F9D039, 0x1058CA226F60892C,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8001, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0xFE605603A6FE8002, 0x4B7F1B62D6A9BE7C, 0x04BE4BC723DCC659, 0xE8AD5F55F8ED1B52, 0x0000000039DA48B2,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ];
    const ATE_LOOP: &'static [i8] = &[  // NAF of |x|, least significant digit first
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1,
        0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, -1, 0, -1, 0, 0,
        1,
    ];
    const OMEGA: &'static [Word] = &[  // primitive cube root of unity in F_p
        0xFE605603A6FE8001,
        0x4B7F1B62D6A9BE7C,
        0x04BE4BC723DCC659,
        0xE8AD5F55F8ED1B52,
        0x0000000039DA48B2,
    ];
    const LAMBDA: &'static [Word] = &[  // eigenvalue of (x, y) -> (ωx, y) on G1, mod r
        0x0FFFFFFFFFFFFFFF,
        0x842E186E6940F185,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
    ];
    const G1_X: &'static [Word] = &[  // default generator of G1
        0xA25FFAEF7F1DA1F7,
        0x90B8A1290570A39C,
        0xCB7D5C0542CAE9E7,
        0x6D1140C27F7335CA,
        0x0325C2B065C4FAC8,
    ];
    const G1_Y: &'static [Word] = &[
        0x3B4544BDC6F7E333,
        0x7D5C9A6B3B4038E1,
        0xF9AC9255DF42134F,
        0x83BA0707D11B291D,
        0x032239CB1D737F22,
    ];
    const G2_X: &'static [Word] = &[  // default generator of G2
        0xD1BE033F82E5F017, 0xB35BA445849CD469, 0x0DEAB97207021685, 0xB9D42FF09CEFE052, 0x036A6220950C7870,
        0x9460650EFC67408B, 0xDEC4AA7AA4398AC6, 0x0B4CE7550B63A7DB, 0x277EDDAF61755109, 0x0C91F3B3134FB62C,
        0xF769BF66AA4D5B1D, 0xD09022E888C30019, 0xCFE660B3E58D022C, 0x41003D36E6C44373, 0x1015C5600F612649,
        0x3F72997D40039EA6, 0x6FBBE7E3AA9AB0D4, 0x55343C891ADD40BE, 0xD074AF7C66E0A7F4, 0x05BAD535DA2A42C5,
    ];
    const G2_Y: &'static [Word] = &[
        0xCF4DB32A05C28B24, 0xFA4B2A701638DA87, 0x0468CB736CF2511B, 0x76E545A9124E5450, 0x0AF7E47B2C41683B,
        0xE6461943B996D329, 0x442AC47F56C08F58, 0xB9AAE97EC0D054B4, 0x00DFA9F1C2EE3EDA, 0x019CA14178B54B1F,
        0x19F8441EC780193F, 0xDC4385324FB2B89D, 0xAD9ED9CC9013FE03, 0xDB4E59ED5843672A, 0x003CC71F2768CCAB,
        0x52E11033FF12E8F8, 0xEEBF4785587075D5, 0xA63098605B00D937, 0x45F944FE44506B4C, 0x101A83D160E4CAB7,
    ];
    const EXPT: &'static [ChainOp] = &[  // f -> f^x on the cyclotomic subgroup
        ChainOp::Square(2, 0, 1),
        ChainOp::Mul(2, 2, 0),
        ChainOp::Square(1, 2, 2),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 3),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 9),
        ChainOp::Mul(1, 1, 2),
        ChainOp::SquareCompressed(1, 1, 15),
    ];

    fn glv_lattice() -> &'static Lattice {
        static LATTICE: OnceLock<Lattice> = OnceLock::new();
        LATTICE.get_or_init(|| Lattice::new(Self::ORDER, Self::LAMBDA))
    }
}



#[cfg(test)]
mod tests {
    use crate::glv::naf;
    use num_bigint::BigUint;
    use super::*;

    /// The Miller loop digits are the NAF of the seed magnitude, with the sign carried separately.
    #[allow(non_snake_case)]
    fn AteLoop_test<PAR: BLS24Param>() {
        assert_eq!(PAR::ATE_LOOP, naf(&BigUint::from(PAR::SEED.unsigned_abs())).as_slice());
        assert_eq!(PAR::ATE_LOOP.last(), Some(&1));
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24315AteLoop_test() {
        AteLoop_test::<BLS24315Param>();
        assert!(BLS24315Param::SEED < 0);
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317AteLoop_test() {
        AteLoop_test::<BLS24317Param>();
        assert!(BLS24317Param::SEED > 0);
    }
}
