use super::Dialect;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Which dialects a partition of a word table applies to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Gate {
    Always,
    /// Only the named dialect. `Unspecified` does not match.
    Is(Dialect),
    /// Every dialect but the named one. `Unspecified` matches.
    IsNot(Dialect),
}

impl Gate {
    pub fn admits(self, dialect: Dialect) -> bool {
        match self {
            Gate::Always => true,
            Gate::Is(d) => dialect == d,
            Gate::IsNot(d) => dialect != d,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Table {
    Keyword,
    ArgKeyword,
    Builtin,
    SystemVariable,
    Constant,
    WordOperator,
}

type Partition = (Gate, &'static [&'static str]);

const KEYWORDS: &[Partition] = &[
    (
        Gate::Always,
        &[
            "BREAK", "COMMON", "CONTINUE", "ELSE", "END", "ENDIF", "REM", "REPEAT", "THEN", "WEND",
        ],
    ),
    (Gate::Is(Dialect::Older), &["STOP"]),
    (
        Gate::IsNot(Dialect::Older),
        &["OTHERWISE", "ENDCASE", "LOOP", "ENDLOOP"],
    ),
];

const ARG_KEYWORDS: &[Partition] = &[
    (
        Gate::Always,
        &[
            "CALL", "DATA", "DEC", "DIM", "ELSEIF", "EXEC", "FOR", "GOSUB", "GOTO", "IF", "INC",
            "INPUT", "LINPUT", "NEXT", "ON", "OUT", "PRINT", "READ", "RESTORE", "RETURN", "SWAP",
            "UNTIL", "USE", "VAR", "WHILE",
        ],
    ),
    (
        Gate::IsNot(Dialect::Older),
        &["CASE", "WHEN", "DEFOUT", "TPRINT", "CONST", "ENUM"],
    ),
];

const BUILTINS: &[Partition] = &[
    (
        Gate::Always,
        &[
            "ABS", "ACCEL", "ACLS", "ACOS", "ARYOP", "ASC", "ASIN", "ATAN", "ATTR", "BACKCOLOR",
            "BEEP", "BGMCHK", "BGMCLEAR", "BGMCONT", "BGMPAUSE", "BGMPLAY", "BGMSET", "BGMSETD",
            "BGMSTOP", "BGMVAR", "BGMVOL", "BIN$", "BIQUAD", "BQPARAM", "BREPEAT", "BUTTON",
            "CEIL", "CHKCALL", "CHKCHR", "CHKFILE", "CHKLABEL", "CHKMML", "CHKVAR", "CHR$",
            "CLASSIFY", "CLIPBOARD", "CLS", "COLOR", "CONTROLLER", "COPY", "COS", "COSH", "DEG",
            "DELETE", "DIALOG", "DTREAD", "EFCSET", "EFCWET", "EXP", "FADE", "FADECHK", "FFT",
            "FFTWFN", "FILES", "FILL", "FLOOR", "FORMAT$", "GBOX", "GCIRCLE", "GCLIP", "GCLS",
            "GCOLOR", "GCOPY", "GFILL", "GLINE", "GLOAD", "GPAINT", "GPSET", "GPUTCHR", "GSAVE",
            "GTRI", "GYROA", "GYROSYNC", "GYROV", "HEX$", "IFFT", "INKEY$", "INSTR", "KEY",
            "LEFT$", "LEN", "LOAD", "LOCATE", "LOG", "MAX", "MID$", "MIN", "OPTION", "PCMCONT",
            "PCMSTOP", "PCMSTREAM", "PCMVOL", "POP", "POW", "PRGDEL", "PRGEDIT", "PRGGET$",
            "PRGINS", "PRGNAME$", "PRGSET", "PRGSIZE", "PROJECT", "PUSH", "RAD", "RANDOMIZE",
            "RENAME", "RGB", "RIGHT$", "RINGCOPY", "RND", "RNDF", "ROUND", "RSORT", "SAVE",
            "SCROLL", "SGN", "SHIFT", "SIN", "SINH", "SNDSTOP", "SORT", "SPANIM", "SPCHK",
            "SPCHR", "SPCLR", "SPCOL", "SPCOLOR", "SPCOLVEC", "SPDEF", "SPFUNC", "SPHIDE",
            "SPHITINFO", "SPHITRC", "SPHITSP", "SPHOME", "SPLINK", "SPOFS", "SPPAGE", "SPROT",
            "SPSCALE", "SPSET", "SPSHOW", "SPSTART", "SPSTOP", "SPUNLINK", "SPUSED", "SPVAR",
            "SQR", "STICK", "STR$", "SUBST$", "TALK", "TALKCHK", "TALKSTOP", "TAN", "TANH",
            "TMREAD", "TOUCH", "UNSHIFT", "VAL", "VSYNC", "WAIT", "WAVSET", "WAVSETA", "XSCREEN",
            "VIBRATE", "PI",
            // Petit Computer
            "CLEAR", "BGMGETV", "BGMSETV", "BGREAD", "BTRIG", "CHRINIT", "CHRREAD", "CHRSET",
            "COLINIT", "COLREAD", "COLSET", "GDRAWMD", "ICONCHK", "ICONCLR", "ICONSET", "PNLSTR",
            "PNLTYPE", "SENDFILE", "RECVFILE", "SPANGLE", "SPGETV", "SPSETV", "SPREAD", "VISIBLE",
        ],
    ),
    (
        Gate::IsNot(Dialect::Newer),
        &[
            "BACKTRACE", "BGANIM", "BGCHK", "BGCLIP", "BGCLR", "BGCOLOR", "BGCOORD", "BGCOPY",
            "BGFILL", "BGFUNC", "BGGET", "BGHIDE", "BGHOME", "BGLOAD", "BGOFS", "BGPAGE", "BGPUT",
            "BGROT", "BGSAVE", "BGSCALE", "BGSCREEN", "BGSHOW", "BGSTART", "BGSTOP", "BGVAR",
            "BGMPRG", "BGMPRGA", "DISPLAY", "DLCOPEN", "EFCOFF", "EFCON", "FONTDEF", "GOFS",
            "GPAGE", "GPRIO", "GSPOIT", "MICDATA", "MICSAVE", "MICSTART", "MICSTOP", "MPEND",
            "MPGET", "MPNAME$", "MPRECV", "MPSEND", "MPSET", "MPSTART", "MPSTAT", "STICKEX",
            "RGBREAD", "SPCLIP", "VISIBLE", "WIDTH", "XOFF", "XON", "GPUTCHR16",
        ],
    ),
    (
        Gate::IsNot(Dialect::Older),
        &[
            "PCMPOS", "TYPEOF", "ARRAY#", "ARRAY%", "ARRAY$", "RESIZE", "INSERT", "REMOVE",
            "FIND", "INSPECT", "DEFARGC", "DEFARG", "DEFOUTC", "INT", "FLOAT", "LAST", "FONTINFO",
            "PERFBEGIN", "PERFEND", "SYSPARAM", "METAEDIT", "METALOAD", "METASAVE", "XCTRLSTYLE",
            "MOUSE", "MBUTTON", "IRSTART", "IRSTOP", "IRSTATE", "IRREAD", "IRSPRITE", "KEYBOARD",
            "TCPIANO", "TCHOUSE", "TCROBOT", "TCFISHING", "TCBIKE", "TCVISOR", "TCCAR",
            "TCPLANE", "TCSUBM", "TCVEHICLE", "LOADG", "LOADV", "SAVEG", "SAVEV", "ANIMDEF",
            "TSCREEN", "TPAGE", "TCOLOR", "TLAYER", "TPUT", "TFILL", "THOME", "TOFS", "TROT",
            "TSCALE", "TSHOW", "THIDE", "TBLEND", "TANIM", "TSTOP", "TSTART", "TCHK", "TVAR",
            "TCOPY", "TSAVE", "TLOAD", "TARRAY", "TUPDATE", "TFUNC", "TCOORD", "GTARGET", "RGBF",
            "HSV", "HSVF", "GPGET", "GARRAY", "GUPDATE", "GSAMPLE", "GPUTCHRP", "SPLAYER", "STOP",
            "LAYER", "LMATRIX", "LFILTER", "LCLIP", "BEEPPIT", "BEEPPAN", "BEEPVOL", "BEEPSTOP",
            "BGMPITCH", "BGMWET", "EFCEN", "SNDMSBAL", "SNDMVOL", "PRGSEEK", "XSUBSCREEN",
            "ENVSTAT", "ENVTYPE", "ENVLOAD", "ENVSAVE", "ENVINPUT$", "ENVFOCUS", "ENVPROJECT",
            "ENVLOCATE", "PUSHKEY", "HELPGET", "HELPINFO", "UISTATE", "UIMASK", "UIPUSHCMPL",
            "DATE$", "TIME$", "RESULT", "CALLIDX", "FREEMEM", "MILLISEC", "MAINCNT",
        ],
    ),
];

// SB4 turned every system variable into a function, so the whole table
// is withheld from the newer dialect.
const SYSTEM_VARIABLES: &[Partition] = &[(
    Gate::IsNot(Dialect::Newer),
    &[
        "CALLIDX", "CSRX", "CSRY", "CSRZ", "DATE$", "TIME$", "ERRLINE", "ERRNUM", "ERRPRG",
        "EXTFEATURE", "FREEMEM", "HARDWARE", "MAINCNT", "MICPOS", "MICSIZE", "MILLISEC",
        "MPCOUNT", "MPHOST", "MPLOCAL", "PCMPOS", "PRGSLOT", "RESULT", "SYSBEEP", "TABSTEP",
        "VERSION",
        // Petit Computer
        "ERR", "ERL", "MAINCNTH", "MAINCNTL", "TCHST", "TCHTIME", "TCHX", "TCHY", "ICONPUSE",
        "ICONPAGE", "ICONPMAX", "FUNCNO", "FREEVAR", "KEYBOARD", "SPHITNO", "SPHITX", "SPHITY",
        "MEM$", "PRGNAME$", "PACKAGE$",
    ],
)];

const CONSTANTS: &[Partition] = &[(Gate::Always, &["TRUE", "FALSE", "CANCEL"])];

const WORD_OPERATORS: &[Partition] = &[
    (Gate::Always, &["AND", "OR", "XOR", "NOT"]),
    (Gate::IsNot(Dialect::Older), &["DIV", "MOD"]),
];

fn partitions(table: Table) -> &'static [Partition] {
    match table {
        Table::Keyword => KEYWORDS,
        Table::ArgKeyword => ARG_KEYWORDS,
        Table::Builtin => BUILTINS,
        Table::SystemVariable => SYSTEM_VARIABLES,
        Table::Constant => CONSTANTS,
        Table::WordOperator => WORD_OPERATORS,
    }
}

const ALL_TABLES: [Table; 6] = [
    Table::Keyword,
    Table::ArgKeyword,
    Table::Builtin,
    Table::SystemVariable,
    Table::Constant,
    Table::WordOperator,
];

type WordMap = HashMap<&'static str, Vec<(Table, Gate)>>;

fn word_map() -> &'static WordMap {
    static WORDS: OnceLock<WordMap> = OnceLock::new();
    WORDS.get_or_init(|| {
        let mut map = WordMap::new();
        for &table in ALL_TABLES.iter() {
            for &(gate, words) in partitions(table) {
                for &word in words {
                    map.entry(word).or_default().push((table, gate));
                }
            }
        }
        map
    })
}

/// Looks up an upper-cased word in one table under a dialect.
pub fn contains(table: Table, word: &str, dialect: Dialect) -> bool {
    match word_map().get(word) {
        Some(entries) => entries
            .iter()
            .any(|&(t, gate)| t == table && gate.admits(dialect)),
        None => false,
    }
}

/// Every word a table holds for a dialect. Order follows the declarations.
pub fn words(table: Table, dialect: Dialect) -> Vec<&'static str> {
    partitions(table)
        .iter()
        .filter(|(gate, _)| gate.admits(dialect))
        .flat_map(|(_, words)| words.iter().copied())
        .collect()
}
