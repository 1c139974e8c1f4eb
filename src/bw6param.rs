#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::chain::ChainOp;
use crate::fp::FpParam;
use crate::glv::Lattice;
use crypto_bigint::Word;
use std::sync::OnceLock;

/// Constants of a BW6 curve <i>E</i>: <i>y&sup2; = x&sup3; + b</i> over <b>F</b><sub><i>p</i></sub>
/// with embedding degree 6, together with its M-type sextic twist <i>E'</i>: <i>y&sup2; = x&sup3; + b'</i>
/// also defined over <b>F</b><sub><i>p</i></sub>.
///
/// Multi-word constants are little-endian word tables in plain (non-Montgomery) form.
pub trait BW6Param: FpParam {
    const SEED: Word;
    const ORDER: &'static [Word];
    const CURVE_B: i64;
    const TWIST_B: i64;
    /// Frobenius coefficients for the six <b>F</b><sub><i>p</i></sub> slots of <b>F</b><sub><i>p&#x2076;</i></sub>.
    const FROB_1: &'static [Word];
    const FROB_2: &'static [Word];
    /// Signed digits of the optimal ate loop, least significant first, in {-3, -1, 0, 1, 3}.
    const ATE_LOOP: &'static [i8];
    const OMEGA: &'static [Word];
    const LAMBDA: &'static [Word];
    const G1_X: &'static [Word];
    const G1_Y: &'static [Word];
    const G2_X: &'static [Word];
    const G2_Y: &'static [Word];
    const EXPT: &'static [ChainOp];
    const EXPT_MINUS_1: &'static [ChainOp];
    const EXPT_PLUS_1: &'static [ChainOp];
    const EXPT_MINUS_1_SQ: &'static [ChainOp];
    const EXPT_MINUS_1_DIV_3: &'static [ChainOp];
    const EXPC1: &'static [ChainOp];
    const EXPC2: &'static [ChainOp];

    /// The GLV lattice basis for <i>(r, &lambda;)</i>, computed once per process.
    fn glv_lattice() -> &'static Lattice;
}

#[derive(Clone, Copy, Debug)]
pub struct BW6761Param;

impl FpParam for BW6761Param {
    const LIMBS: usize = 12;
    const MODULUS: &'static [Word] = &[  // base field modulus
        0xF49D00000000008B, 0xE6913E6870000082, 0x160CF8AEEAF0A437, 0x98A116C25667A8F8,
        0x71DCD3DC73EBFF2E, 0x8689C8ED12F9FD90, 0x03CEBAFF25B42304, 0x707BA638E584E919,
        0x528275EF8087BE41, 0xB926186A81D14688, 0xD187C94004FAFF3E, 0x0122E824FB83CE0A,
        // p = 6891450384315732539396789682275657542479668912536150109513790160209623422243491736087683183289411687640864567753786613451161759120554247759349511699125301598951605099378508850372543631423596795951899700429969112842764913119068299: 761 bits
    ];
    const NEG_INV_MOD: &'static [Word] = &[  // -1/p mod 2^(64*LIMBS)
        0x0A5593568FA798DD, 0xFCFD2AF7A884646F, 0xE254C3F6ACA996BA, 0xFB2C5CCE92516274,
        0xBE8267AEDAB1F1D7, 0xBFA824611ABBCB60, 0x231E6D7F443838F0, 0xF319B76219F29313,
        0x1AEF4E9E4D3B5DE7, 0xD3914ABC9A1DD7DE, 0xA6D84F9F6E55BCDC, 0xC5B5257757C3B534,
    ];
    const MONTY_P: &'static [Word] = &[  // (2^(64*LIMBS))^2 mod p
        0xC686392D2D1FA659, 0x7B14C9B2F79484AB, 0x7FA1E825C1D2B459, 0xD6EC28F848329D88,
        0x4AFB427B73A1ED40, 0x972C69400D5930AE, 0x2C7A26BF8C995976, 0xAC52E458C6E57AF9,
        0xAC731BFA0C536DFE, 0x121E5C630B103F50, 0x8F1B0953B886CDA4, 0x00AD253C2DA8D807,
    ];
    const NON_RESIDUE: i64 = -4;  // F_p3 = F_p[u]/<u^3 + 4>
}

impl BW6Param for BW6761Param {
    const SEED: Word = 0x8508C00000000001;  // x = 9586122913090633729
    const ORDER: &'static [Word] = &[  // prime group order r
        0x8508C00000000001, 0x170B5D4430000000, 0x1EF3622FBA094800, 0x1A22D9F300F5138F,
        0xC63B05C06CA1493B, 0x01AE3A4617C510EA, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        // r = 258664426012969094010652733694893533536393512754914660539884262666720468348340822774968888139573360124440321458177: 377 bits
    ];
    const CURVE_B: i64 = -1;  // E: y^2 = x^3 + b
    const TWIST_B: i64 = 4;  // E': y^2 = x^3 + b'
    const FROB_1: &'static [Word] = &[  // (-4)^(k*(p^1 - 1)/6) for k in 0..6
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x5E7BC00000000061, 0x214983DE30000053, 0x5FE3F89C11811C1E, 0xA5B093ED79B1C57B,
        0xAB8579E02ED3CDDC, 0xF87FA59308C07A8F, 0x5870636CB60D217F, 0x823132B971CDEFC6,
        0x256AB7AE14297A1A, 0x4D06E68545F7E64C, 0x27035CDF02ACB274, 0x00CFCA638F1500E3,
        0x5E7BC00000000060, 0x214983DE30000053, 0x5FE3F89C11811C1E, 0xA5B093ED79B1C57B,
        0xAB8579E02ED3CDDC, 0xF87FA59308C07A8F, 0x5870636CB60D217F, 0x823132B971CDEFC6,
        0x256AB7AE14297A1A, 0x4D06E68545F7E64C, 0x27035CDF02ACB274, 0x00CFCA638F1500E3,
        0xF49D00000000008A, 0xE6913E6870000082, 0x160CF8AEEAF0A437, 0x98A116C25667A8F8,
        0x71DCD3DC73EBFF2E, 0x8689C8ED12F9FD90, 0x03CEBAFF25B42304, 0x707BA638E584E919,
        0x528275EF8087BE41, 0xB926186A81D14688, 0xD187C94004FAFF3E, 0x0122E824FB83CE0A,
        0x962140000000002A, 0xC547BA8A4000002F, 0xB6290012D96F8819, 0xF2F082D4DCB5E37C,
        0xC65759FC45183151, 0x8E0A235A0A398300, 0xAB5E57926FA70184, 0xEE4A737F73B6F952,
        0x2D17BE416C5E4426, 0x6C1F31E53BD9603C, 0xAA846C61024E4CCA, 0x00531DC16C6ECD27,
        0x962140000000002B, 0xC547BA8A4000002F, 0xB6290012D96F8819, 0xF2F082D4DCB5E37C,
        0xC65759FC45183151, 0x8E0A235A0A398300, 0xAB5E57926FA70184, 0xEE4A737F73B6F952,
        0x2D17BE416C5E4426, 0x6C1F31E53BD9603C, 0xAA846C61024E4CCA, 0x00531DC16C6ECD27,
    ];
    const FROB_2: &'static [Word] = &[  // (-4)^(k*(p^2 - 1)/6) for k in 0..6
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x5E7BC00000000060, 0x214983DE30000053, 0x5FE3F89C11811C1E, 0xA5B093ED79B1C57B,
        0xAB8579E02ED3CDDC, 0xF87FA59308C07A8F, 0x5870636CB60D217F, 0x823132B971CDEFC6,
        0x256AB7AE14297A1A, 0x4D06E68545F7E64C, 0x27035CDF02ACB274, 0x00CFCA638F1500E3,
        0x962140000000002A, 0xC547BA8A4000002F, 0xB6290012D96F8819, 0xF2F082D4DCB5E37C,
        0xC65759FC45183151, 0x8E0A235A0A398300, 0xAB5E57926FA70184, 0xEE4A737F73B6F952,
        0x2D17BE416C5E4426, 0x6C1F31E53BD9603C, 0xAA846C61024E4CCA, 0x00531DC16C6ECD27,
        0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x5E7BC00000000060, 0x214983DE30000053, 0x5FE3F89C11811C1E, 0xA5B093ED79B1C57B,
        0xAB8579E02ED3CDDC, 0xF87FA59308C07A8F, 0x5870636CB60D217F, 0x823132B971CDEFC6,
        0x256AB7AE14297A1A, 0x4D06E68545F7E64C, 0x27035CDF02ACB274, 0x00CFCA638F1500E3,
        0x962140000000002A, 0xC547BA8A4000002F, 0xB6290012D96F8819, 0xF2F082D4DCB5E37C,
        0xC65759FC45183151, 0x8E0A235A0A398300, 0xAB5E57926FA70184, 0xEE4A737F73B6F952,
        0x2D17BE416C5E4426, 0x6C1F31E53BD9603C, 0xAA846C61024E4CCA, 0x00531DC16C6ECD27,
    ];
    const ATE_LOOP: &'static [i8] = &[  // 3*NAF(x^3 - x^2 - x) + NAF(x + 1), least significant digit first
        -3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0,
        1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0,
        3, 0, 0, -3, 0, 3, 0, -3, 0, 0, 0, 0, -3, 0, 3, 0,
        0, 0, 3, 0, 0, 0, 3, 0, 0, 3, 0, 3, 0, 0, 0, 3,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -3, 0, -3, 0, 0, 0,
        0, -3, 0, 0, 3, 0, 0, 0, -3, 0, 0, -3, 0, 3, 0, -3,
        0, 0, 0, 3, 0, 0, 3, 0, -3, 0, 3, 0, 3, 0, 0, 0,
        3, 0, -3, 0, -3, 0, 0, 0, 0, 0, 3, 0, 0, 3,
    ];
    const OMEGA: &'static [Word] = &[  // primitive cube root of unity in F_p
        0x962140000000002A, 0xC547BA8A4000002F, 0xB6290012D96F8819, 0xF2F082D4DCB5E37C,
        0xC65759FC45183151, 0x8E0A235A0A398300, 0xAB5E57926FA70184, 0xEE4A737F73B6F952,
        0x2D17BE416C5E4426, 0x6C1F31E53BD9603C, 0xAA846C61024E4CCA, 0x00531DC16C6ECD27,
    ];
    const LAMBDA: &'static [Word] = &[  // eigenvalue of (x, y) -> (ωx, y) on G1, mod r
        0x8508C00000000001, 0x452217CC90000000, 0xC5ED1347970DEC00, 0x619AAF7D34594AAB,
        0x09B3AF05DD14F6EC, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ];
    const G1_X: &'static [Word] = &[  // default generator of G1
        0x4088F3AF66E5B43D, 0x055928ACA6AF603F, 0x6750DD0356133E82, 0x03758F9A280CA27F,
        0x5BD71FA0C9EA0971, 0xA17A54CE47729B90, 0x11DBFCD294C2E746, 0x79017FFAC15520AC,
        0xEE05C54B85F56FC7, 0xE6A0CFB7551B27F0, 0xB277CE98A477BEAE, 0x01075B020EA190C8,
    ];
    const G1_Y: &'static [Word] = &[
        0xBAFC8F2DB4E95363, 0xAD1CB2BE0B20D2A1, 0xB2B08119CAD0FB93, 0x9F9DF141B3053253,
        0xBE3FB90B6FC2CDD4, 0xCC685D31717A4C55, 0xC5B8FA1771B5B806, 0x265909F1AF7E0DBA,
        0x1A7348D2A2E573A3, 0x0F952589884C9EC6, 0xE6FD637B45CC2A42, 0x0058B84E0A6FC574,
    ];
    const G2_X: &'static [Word] = &[  // default generator of G2
        0xA830C194CD025F1C, 0x6410CF4FE1BF995B, 0x00E96EFBC2AD54B0, 0xCE6948CB3CD208D7,
        0x963317A300E1B6BA, 0xC5BBCAE9AC70E7C7, 0x734EC3F1F09FEB58, 0x26B41C5DAB3DA268,
        0x4C06201013890F6D, 0xD61053AAC5A7115F, 0xC852A82E69D660F9, 0x0110133241D9B816,
    ];
    const G2_Y: &'static [Word] = &[
        0xEB70A16728C73B61, 0x91EC0594F9EAC689, 0x58AA2D3A3C5A02A5, 0x3EA96FCD504AFFC7,
        0x8906C170FFA82300, 0x64F293DBD2C712B8, 0x94C97EB733293FEF, 0x0A1D86C80B95A59C,
        0x81A78E2753FFE316, 0x26B7CF9ACEC2181C, 0x8179EB10E4B6D2DC, 0x0017C3357761369F,
    ];
    const EXPT: &'static [ChainOp] = &[  // f -> f^x
        ChainOp::Square(1, 0, 5),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(2, 1, 0),
        ChainOp::Square(1, 1, 7),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(1, 1, 4),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::SquareCompressed(1, 1, 46),
        ChainOp::Mul(1, 1, 0),
    ];
    const EXPT_MINUS_1: &'static [ChainOp] = &[  // f -> f^(x - 1)
        ChainOp::Square(1, 0, 5),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(2, 1, 0),
        ChainOp::Square(1, 1, 7),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(1, 1, 4),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::SquareCompressed(1, 1, 46),
    ];
    const EXPT_PLUS_1: &'static [ChainOp] = &[  // f -> f^(x + 1)
        ChainOp::Square(1, 0, 5),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(2, 1, 0),
        ChainOp::Square(1, 1, 7),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(1, 1, 4),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(1, 1, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::SquareCompressed(1, 1, 46),
        ChainOp::Square(2, 0, 1),
        ChainOp::Mul(1, 1, 2),
    ];
    const EXPT_MINUS_1_SQ: &'static [ChainOp] = &[  // f -> f^((x - 1)^2)
        ChainOp::Square(1, 0, 1),
        ChainOp::Mul(2, 0, 1),
        ChainOp::Square(3, 2, 1),
        ChainOp::Mul(2, 2, 3),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Mul(3, 3, 1),
        ChainOp::Mul(2, 2, 3),
        ChainOp::Square(4, 2, 1),
        ChainOp::Mul(4, 3, 4),
        ChainOp::Mul(2, 2, 4),
        ChainOp::Square(4, 4, 7),
        ChainOp::Mul(3, 3, 4),
        ChainOp::Square(3, 3, 11),
        ChainOp::Mul(3, 2, 3),
        ChainOp::Square(3, 3, 9),
        ChainOp::Mul(2, 2, 3),
        ChainOp::Square(2, 2, 1),
        ChainOp::Mul(1, 1, 2),
        ChainOp::SquareCompressed(1, 1, 92),
    ];
    const EXPT_MINUS_1_DIV_3: &'static [ChainOp] = &[  // f -> f^((x - 1)/3)
        ChainOp::Square(1, 0, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Mul(2, 1, 0),
        ChainOp::Square(2, 2, 1),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(2, 1, 7),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(1, 1, 5),
        ChainOp::Mul(1, 1, 0),
        ChainOp::SquareCompressed(1, 1, 46),
    ];
    const EXPC1: &'static [ChainOp] = &[  // f -> f^11
        ChainOp::Square(1, 0, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Mul(2, 0, 1),
        ChainOp::Square(2, 2, 1),
        ChainOp::Mul(1, 1, 2),
    ];
    const EXPC2: &'static [ChainOp] = &[  // f -> f^103
        ChainOp::Square(1, 0, 1),
        ChainOp::Mul(1, 1, 0),
        ChainOp::Square(2, 1, 4),
        ChainOp::Mul(1, 1, 2),
        ChainOp::Square(1, 1, 1),
        ChainOp::Mul(1, 1, 0),
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

    /// The Miller loop digits are <i>3&middot;NAF(x&sup3; - x&sup2; - x) + NAF(x + 1)</i>, digit by digit.
    #[allow(non_snake_case)]
    fn AteLoop_test<PAR: BW6Param>() {
        let x = BigUint::from(PAR::SEED);
        let u1 = naf(&(&x*&x*&x - &x*&x - &x));
        let u2 = naf(&(&x + 1u32));
        let n = u1.len().max(u2.len());
        let digit = |u: &[i8], i: usize| u.get(i).copied().unwrap_or(0);
        let expected: Vec<i8> = (0..n).map(|i| 3*digit(&u1, i) + digit(&u2, i)).collect();
        assert_eq!(PAR::ATE_LOOP, expected.as_slice());
        assert!(PAR::ATE_LOOP.iter().all(|d| matches!(d, -3 | -1 | 0 | 1 | 3)));
        assert_ne!(PAR::ATE_LOOP.last(), Some(&0));
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761AteLoop_test() {
        AteLoop_test::<BW6761Param>();
    }
}
