//! Alpha test and framebuffer blending

/// Comparison used by the alpha test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AlphaFunction {
    Never = 0,
    Less = 1,
    LessOrEqual = 2,
    Equal = 3,
    NotEqual = 4,
    GreaterOrEqual = 5,
    Greater = 6,
    #[default]
    Always = 7,
}

impl AlphaFunction {
    pub fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => AlphaFunction::Never,
            1 => AlphaFunction::Less,
            2 => AlphaFunction::LessOrEqual,
            3 => AlphaFunction::Equal,
            4 => AlphaFunction::NotEqual,
            5 => AlphaFunction::GreaterOrEqual,
            6 => AlphaFunction::Greater,
            7 => AlphaFunction::Always,
            _ => return None,
        })
    }
}

/// How the two alpha comparisons are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AlphaOp {
    #[default]
    And = 0,
    Or = 1,
    Xor = 2,
    Nor = 3,
}

impl AlphaOp {
    pub fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => AlphaOp::And,
            1 => AlphaOp::Or,
            2 => AlphaOp::Xor,
            3 => AlphaOp::Nor,
            _ => return None,
        })
    }
}

/// Two-sided alpha test: `comp0(alpha, ref0) op comp1(alpha, ref1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlphaCompare {
    pub comp0: AlphaFunction,
    pub comp1: AlphaFunction,
    pub op: AlphaOp,
    pub ref0: u8,
    pub ref1: u8,
}

impl AlphaCompare {
    /// Packed comparator byte: `comp0` in the low nibble, `comp1` in the high
    pub fn comparators_byte(&self) -> u8 {
        (self.comp0 as u8) | ((self.comp1 as u8) << 4)
    }
}

/// Blend equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BlendOp {
    Disable = 0,
    #[default]
    Add = 1,
    Subtract = 2,
    ReverseSubtract = 3,
    SelectMin = 4,
    SelectMax = 5,
}

impl BlendOp {
    pub fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => BlendOp::Disable,
            1 => BlendOp::Add,
            2 => BlendOp::Subtract,
            3 => BlendOp::ReverseSubtract,
            4 => BlendOp::SelectMin,
            5 => BlendOp::SelectMax,
            _ => return None,
        })
    }
}

/// Blend equation operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    DestColor = 2,
    DestInvColor = 3,
    SourceAlpha = 4,
    SourceInvAlpha = 5,
    DestAlpha = 6,
    DestInvAlpha = 7,
    SourceColor = 8,
    SourceInvColor = 9,
}

impl BlendFactor {
    pub fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => BlendFactor::Zero,
            1 => BlendFactor::One,
            2 => BlendFactor::DestColor,
            3 => BlendFactor::DestInvColor,
            4 => BlendFactor::SourceAlpha,
            5 => BlendFactor::SourceInvAlpha,
            6 => BlendFactor::DestAlpha,
            7 => BlendFactor::DestInvAlpha,
            8 => BlendFactor::SourceColor,
            9 => BlendFactor::SourceInvColor,
            _ => return None,
        })
    }
}

/// Framebuffer blend configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendMode {
    pub op: BlendOp,
    pub source: BlendFactor,
    pub destination: BlendFactor,
    /// Raw logic operation, used when blending is replaced by a logic op
    pub logic_op: u8,
}

impl Default for BlendMode {
    /// Standard alpha blending
    fn default() -> Self {
        BlendMode {
            op: BlendOp::Add,
            source: BlendFactor::SourceAlpha,
            destination: BlendFactor::SourceInvAlpha,
            logic_op: 0,
        }
    }
}
