/// SQL keywords and punctuation.
///
/// Multi-word clauses (`ORDER BY`, `INSERT INTO`) are split into their words
/// so the renderer only has to decide spacing between neighbouring tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Statements and clauses
    SELECT,
    INSERT,
    INTO,
    DELETE,
    VALUES,
    DEFAULT,
    FROM,
    WHERE,
    ORDER,
    BY,
    LIMIT,
    OFFSET,
    ON,
    AS,

    // Predicates
    AND,
    OR,
    NOT,
    LIKE,
    IN,
    IS,
    NULL,

    // Punctuation and operators
    LPAREN,
    RPAREN,
    COMMA,
    SEMI,
    DOT,
    STAR,
    EQ,
    NE,
    LT,
    GT,
    LE,
    GE,
}

impl Token {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::SELECT => "SELECT",
            Token::INSERT => "INSERT",
            Token::INTO => "INTO",
            Token::DELETE => "DELETE",
            Token::VALUES => "VALUES",
            Token::DEFAULT => "DEFAULT",
            Token::FROM => "FROM",
            Token::WHERE => "WHERE",
            Token::ORDER => "ORDER",
            Token::BY => "BY",
            Token::LIMIT => "LIMIT",
            Token::OFFSET => "OFFSET",
            Token::ON => "ON",
            Token::AS => "AS",
            Token::AND => "AND",
            Token::OR => "OR",
            Token::NOT => "NOT",
            Token::LIKE => "LIKE",
            Token::IN => "IN",
            Token::IS => "IS",
            Token::NULL => "NULL",
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::COMMA => ",",
            Token::SEMI => ";",
            Token::DOT => ".",
            Token::STAR => "*",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::GT => ">",
            Token::LE => "<=",
            Token::GE => ">=",
        }
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
