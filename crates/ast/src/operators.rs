string_enum! {
    pub enum BinaryOp {
        /// `==`
        EqEq => "==",
        /// `!=`
        NotEq => "!=",
        /// `===`
        EqEqEq => "===",
        /// `!==`
        NotEqEq => "!==",
        /// `<`
        Lt => "<",
        /// `<=`
        LtEq => "<=",
        /// `>`
        Gt => ">",
        /// `>=`
        GtEq => ">=",
        /// `<<`
        LShift => "<<",
        /// `>>`
        RShift => ">>",
        /// `>>>`
        ZeroFillRShift => ">>>",
        /// `+`
        Add => "+",
        /// `-`
        Sub => "-",
        /// `*`
        Mul => "*",
        /// `/`
        Div => "/",
        /// `%`
        Mod => "%",
        /// `|`
        BitOr => "|",
        /// `^`
        BitXor => "^",
        /// `&`
        BitAnd => "&",
        /// `||`
        LogicalOr => "||",
        /// `&&`
        LogicalAnd => "&&",
        /// `in`
        In => "in",
        /// `instanceof`
        InstanceOf => "instanceof",
        /// `**`
        Exp => "**",
        /// `??`
        NullishCoalescing => "??",
    }
}

impl BinaryOp {
    /// Serialized as `LogicalExpression` rather than `BinaryExpression`.
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            BinaryOp::LogicalOr | BinaryOp::LogicalAnd | BinaryOp::NullishCoalescing
        )
    }

    /// `??` shares a level with `||`; mixing them without parentheses is
    /// rejected by the parser, not by precedence.
    pub fn precedence(self) -> u8 {
        use BinaryOp::*;
        match self {
            LogicalOr | NullishCoalescing => 1,
            LogicalAnd => 2,
            BitOr => 3,
            BitXor => 4,
            BitAnd => 5,
            EqEq | NotEq | EqEqEq | NotEqEq => 6,
            Lt | LtEq | Gt | GtEq | In | InstanceOf => 7,
            LShift | RShift | ZeroFillRShift => 8,
            Add | Sub => 9,
            Mul | Div | Mod => 10,
            Exp => 11,
        }
    }
}

string_enum! {
    pub enum AssignOp {
        /// `=`
        Assign => "=",
        /// `+=`
        AddAssign => "+=",
        /// `-=`
        SubAssign => "-=",
        /// `*=`
        MulAssign => "*=",
        /// `/=`
        DivAssign => "/=",
        /// `%=`
        ModAssign => "%=",
        /// `<<=`
        LShiftAssign => "<<=",
        /// `>>=`
        RShiftAssign => ">>=",
        /// `>>>=`
        ZeroFillRShiftAssign => ">>>=",
        /// `|=`
        BitOrAssign => "|=",
        /// `^=`
        BitXorAssign => "^=",
        /// `&=`
        BitAndAssign => "&=",
        /// `**=`
        ExpAssign => "**=",
    }
}

string_enum! {
    pub enum UpdateOp {
        /// `++`
        PlusPlus => "++",
        /// `--`
        MinusMinus => "--",
    }
}

string_enum! {
    pub enum UnaryOp {
        /// `-`
        Minus => "-",
        /// `+`
        Plus => "+",
        /// `!`
        Bang => "!",
        /// `~`
        Tilde => "~",
        /// `typeof`
        TypeOf => "typeof",
        /// `void`
        Void => "void",
        /// `delete`
        Delete => "delete",
    }
}
