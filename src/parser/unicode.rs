//! Name to code point tables used to resolve [`SymbolKey::Name`](super::symbols::SymbolKey::Name)
//!
//! Both tables are sorted by name so that lookups are a binary search.

/// Looks up a TeX command name, e.g. `alpha`
pub fn tex_to_unicode(name : &str) -> Option<char> {
    lookup(TEX_TO_UNICODE, name)
}

/// Looks up an Adobe Type1 glyph name, e.g. `degree`
pub fn type1_to_unicode(name : &str) -> Option<char> {
    lookup(TYPE1_TO_UNICODE, name)
}

fn lookup(table : &[(&str, char)], name : &str) -> Option<char> {
    table
        .binary_search_by(|(entry, _)| (*entry).cmp(name))
        .ok()
        .map(|index| table[index].1)
}

/// TeX command names (without the backslash) and the code point they stand for, sorted by name
pub static TEX_TO_UNICODE : &[(&str, char)] = &[
    ("AA",                        '\u{00C5}'),
    ("AE",                        '\u{00C6}'),
    ("Angstrom",                  '\u{212B}'),
    ("Delta",                     '\u{0394}'),
    ("Downarrow",                 '\u{21D3}'),
    ("Gamma",                     '\u{0393}'),
    ("Im",                        '\u{2111}'),
    ("L",                         '\u{0141}'),
    ("Lambda",                    '\u{039B}'),
    ("Leftarrow",                 '\u{21D0}'),
    ("Leftrightarrow",            '\u{21D4}'),
    ("Longleftarrow",             '\u{27F8}'),
    ("Longleftrightarrow",        '\u{27FA}'),
    ("Longrightarrow",            '\u{27F9}'),
    ("O",                         '\u{00D8}'),
    ("OE",                        '\u{0152}'),
    ("Omega",                     '\u{03A9}'),
    ("P",                         '\u{00B6}'),
    ("Phi",                       '\u{03A6}'),
    ("Pi",                        '\u{03A0}'),
    ("Psi",                       '\u{03A8}'),
    ("Re",                        '\u{211C}'),
    ("Rightarrow",                '\u{21D2}'),
    ("S",                         '\u{00A7}'),
    ("Sigma",                     '\u{03A3}'),
    ("Theta",                     '\u{0398}'),
    ("Uparrow",                   '\u{21D1}'),
    ("Updownarrow",               '\u{21D5}'),
    ("Upsilon",                   '\u{03A5}'),
    ("Vert",                      '\u{2016}'),
    ("Xi",                        '\u{039E}'),
    ("aa",                        '\u{00E5}'),
    ("ae",                        '\u{00E6}'),
    ("aleph",                     '\u{2135}'),
    ("alpha",                     '\u{03B1}'),
    ("amalg",                     '\u{2A3F}'),
    ("angle",                     '\u{2220}'),
    ("angstrom",                  '\u{212B}'),
    ("approx",                    '\u{2248}'),
    ("ast",                       '\u{2217}'),
    ("asymp",                     '\u{224D}'),
    ("backslash",                 '\u{005C}'),
    ("beta",                      '\u{03B2}'),
    ("beth",                      '\u{2136}'),
    ("bigcap",                    '\u{22C2}'),
    ("bigcup",                    '\u{22C3}'),
    ("bigodot",                   '\u{2A00}'),
    ("bigoplus",                  '\u{2A01}'),
    ("bigotimes",                 '\u{2A02}'),
    ("bigsqcup",                  '\u{2A06}'),
    ("bigtriangledown",           '\u{25BD}'),
    ("bigtriangleup",             '\u{25B3}'),
    ("biguplus",                  '\u{2A04}'),
    ("bigvee",                    '\u{22C1}'),
    ("bigwedge",                  '\u{22C0}'),
    ("bot",                       '\u{22A5}'),
    ("bowtie",                    '\u{22C8}'),
    ("bullet",                    '\u{2219}'),
    ("cap",                       '\u{2229}'),
    ("cdot",                      '\u{22C5}'),
    ("cdots",                     '\u{22EF}'),
    ("chi",                       '\u{03C7}'),
    ("circ",                      '\u{2218}'),
    ("circumflexaccent",          '\u{0302}'),
    ("clubsuit",                  '\u{2663}'),
    ("combiningacuteaccent",      '\u{0301}'),
    ("combiningbreve",            '\u{0306}'),
    ("combiningcaron",            '\u{030C}'),
    ("combiningdiaeresis",        '\u{0308}'),
    ("combiningdotabove",         '\u{0307}'),
    ("combininggraveaccent",      '\u{0300}'),
    ("combiningoverline",         '\u{0304}'),
    ("combiningrightarrowabove",  '\u{20D7}'),
    ("combiningtilde",            '\u{0303}'),
    ("cong",                      '\u{2245}'),
    ("coprod",                    '\u{2210}'),
    ("copyright",                 '\u{00A9}'),
    ("cup",                       '\u{222A}'),
    ("dag",                       '\u{2020}'),
    ("dagger",                    '\u{2020}'),
    ("dashv",                     '\u{22A3}'),
    ("ddag",                      '\u{2021}'),
    ("ddagger",                   '\u{2021}'),
    ("ddots",                     '\u{22F1}'),
    ("delta",                     '\u{03B4}'),
    ("diamond",                   '\u{22C4}'),
    ("diamondsuit",               '\u{2662}'),
    ("digamma",                   '\u{03DD}'),
    ("div",                       '\u{00F7}'),
    ("dollar",                    '\u{0024}'),
    ("doteq",                     '\u{2250}'),
    ("downarrow",                 '\u{2193}'),
    ("ell",                       '\u{2113}'),
    ("emptyset",                  '\u{2205}'),
    ("epsilon",                   '\u{03F5}'),
    ("equiv",                     '\u{2261}'),
    ("eta",                       '\u{03B7}'),
    ("exists",                    '\u{2203}'),
    ("flat",                      '\u{266D}'),
    ("forall",                    '\u{2200}'),
    ("frown",                     '\u{2322}'),
    ("gamma",                     '\u{03B3}'),
    ("ge",                        '\u{2265}'),
    ("geq",                       '\u{2265}'),
    ("gets",                      '\u{2190}'),
    ("gg",                        '\u{226B}'),
    ("hbar",                      '\u{210F}'),
    ("heartsuit",                 '\u{2661}'),
    ("hookleftarrow",             '\u{21A9}'),
    ("hookrightarrow",            '\u{21AA}'),
    ("i",                         '\u{0131}'),
    ("iiint",                     '\u{222D}'),
    ("iint",                      '\u{222C}'),
    ("imath",                     '\u{0131}'),
    ("in",                        '\u{2208}'),
    ("infty",                     '\u{221E}'),
    ("int",                       '\u{222B}'),
    ("iota",                      '\u{03B9}'),
    ("j",                         '\u{0237}'),
    ("jmath",                     '\u{0237}'),
    ("kappa",                     '\u{03BA}'),
    ("l",                         '\u{0142}'),
    ("lambda",                    '\u{03BB}'),
    ("langle",                    '\u{27E8}'),
    ("lbrace",                    '\u{007B}'),
    ("lceil",                     '\u{2308}'),
    ("ldots",                     '\u{2026}'),
    ("le",                        '\u{2264}'),
    ("leftarrow",                 '\u{2190}'),
    ("leftharpoondown",           '\u{21BD}'),
    ("leftharpoonup",             '\u{21BC}'),
    ("leftrightarrow",            '\u{2194}'),
    ("leq",                       '\u{2264}'),
    ("lfloor",                    '\u{230A}'),
    ("ll",                        '\u{226A}'),
    ("lnot",                      '\u{00AC}'),
    ("longleftarrow",             '\u{27F5}'),
    ("longleftrightarrow",        '\u{27F7}'),
    ("longmapsto",                '\u{27FC}'),
    ("longrightarrow",            '\u{27F6}'),
    ("mapsto",                    '\u{21A6}'),
    ("mid",                       '\u{2223}'),
    ("models",                    '\u{22A7}'),
    ("mp",                        '\u{2213}'),
    ("mu",                        '\u{03BC}'),
    ("nabla",                     '\u{2207}'),
    ("natural",                   '\u{266E}'),
    ("ne",                        '\u{2260}'),
    ("nearrow",                   '\u{2197}'),
    ("neg",                       '\u{00AC}'),
    ("neq",                       '\u{2260}'),
    ("nexists",                   '\u{2204}'),
    ("ni",                        '\u{220B}'),
    ("notin",                     '\u{2209}'),
    ("nu",                        '\u{03BD}'),
    ("nwarrow",                   '\u{2196}'),
    ("o",                         '\u{00F8}'),
    ("odot",                      '\u{2299}'),
    ("oe",                        '\u{0153}'),
    ("oint",                      '\u{222E}'),
    ("omega",                     '\u{03C9}'),
    ("ominus",                    '\u{2296}'),
    ("oplus",                     '\u{2295}'),
    ("oslash",                    '\u{2298}'),
    ("otimes",                    '\u{2297}'),
    ("parallel",                  '\u{2225}'),
    ("partial",                   '\u{2202}'),
    ("percent",                   '\u{0025}'),
    ("perp",                      '\u{27C2}'),
    ("phi",                       '\u{03D5}'),
    ("pi",                        '\u{03C0}'),
    ("pm",                        '\u{00B1}'),
    ("pounds",                    '\u{00A3}'),
    ("prec",                      '\u{227A}'),
    ("preceq",                    '\u{2AAF}'),
    ("prime",                     '\u{2032}'),
    ("prod",                      '\u{220F}'),
    ("propto",                    '\u{221D}'),
    ("psi",                       '\u{03C8}'),
    ("rangle",                    '\u{27E9}'),
    ("rbrace",                    '\u{007D}'),
    ("rceil",                     '\u{2309}'),
    ("rfloor",                    '\u{230B}'),
    ("rho",                       '\u{03C1}'),
    ("rightarrow",                '\u{2192}'),
    ("rightharpoondown",          '\u{21C1}'),
    ("rightharpoonup",            '\u{21C0}'),
    ("rightleftharpoons",         '\u{21CC}'),
    ("searrow",                   '\u{2198}'),
    ("setminus",                  '\u{2216}'),
    ("sharp",                     '\u{266F}'),
    ("sigma",                     '\u{03C3}'),
    ("sim",                       '\u{223C}'),
    ("simeq",                     '\u{2243}'),
    ("smile",                     '\u{2323}'),
    ("spadesuit",                 '\u{2660}'),
    ("sqcap",                     '\u{2293}'),
    ("sqcup",                     '\u{2294}'),
    ("sqsubseteq",                '\u{2291}'),
    ("sqsupseteq",                '\u{2292}'),
    ("ss",                        '\u{00DF}'),
    ("star",                      '\u{22C6}'),
    ("subset",                    '\u{2282}'),
    ("subseteq",                  '\u{2286}'),
    ("succ",                      '\u{227B}'),
    ("succeq",                    '\u{2AB0}'),
    ("sum",                       '\u{2211}'),
    ("supset",                    '\u{2283}'),
    ("supseteq",                  '\u{2287}'),
    ("surd",                      '\u{221A}'),
    ("swarrow",                   '\u{2199}'),
    ("tau",                       '\u{03C4}'),
    ("theta",                     '\u{03B8}'),
    ("times",                     '\u{00D7}'),
    ("to",                        '\u{2192}'),
    ("top",                       '\u{22A4}'),
    ("triangle",                  '\u{25B3}'),
    ("triangleleft",              '\u{25C1}'),
    ("triangleright",             '\u{25B7}'),
    ("uparrow",                   '\u{2191}'),
    ("updownarrow",               '\u{2195}'),
    ("uplus",                     '\u{228E}'),
    ("upsilon",                   '\u{03C5}'),
    ("varepsilon",                '\u{03B5}'),
    ("varkappa",                  '\u{03F0}'),
    ("varphi",                    '\u{03C6}'),
    ("varpi",                     '\u{03D6}'),
    ("varrho",                    '\u{03F1}'),
    ("varsigma",                  '\u{03C2}'),
    ("vartheta",                  '\u{03D1}'),
    ("vdash",                     '\u{22A2}'),
    ("vdots",                     '\u{22EE}'),
    ("vee",                       '\u{2228}'),
    ("vert",                      '\u{007C}'),
    ("wedge",                     '\u{2227}'),
    ("wp",                        '\u{2118}'),
    ("wr",                        '\u{2240}'),
    ("xi",                        '\u{03BE}'),
    ("yen",                       '\u{00A5}'),
    ("zeta",                      '\u{03B6}'),
];

/// Adobe Type1 glyph names and their code point, sorted by name
pub static TYPE1_TO_UNICODE : &[(&str, char)] = &[
    ("AE",                        '\u{00C6}'),
    ("Alpha",                     '\u{0391}'),
    ("Aring",                     '\u{00C5}'),
    ("Beta",                      '\u{0392}'),
    ("Chi",                       '\u{03A7}'),
    ("Delta",                     '\u{2206}'),
    ("Epsilon",                   '\u{0395}'),
    ("Eta",                       '\u{0397}'),
    ("Euro",                      '\u{20AC}'),
    ("Gamma",                     '\u{0393}'),
    ("Ifraktur",                  '\u{2111}'),
    ("Iota",                      '\u{0399}'),
    ("Kappa",                     '\u{039A}'),
    ("Lambda",                    '\u{039B}'),
    ("Mu",                        '\u{039C}'),
    ("Nu",                        '\u{039D}'),
    ("Omega",                     '\u{2126}'),
    ("Omicron",                   '\u{039F}'),
    ("Oslash",                    '\u{00D8}'),
    ("Phi",                       '\u{03A6}'),
    ("Pi",                        '\u{03A0}'),
    ("Psi",                       '\u{03A8}'),
    ("Rfraktur",                  '\u{211C}'),
    ("Rho",                       '\u{03A1}'),
    ("Sigma",                     '\u{03A3}'),
    ("Tau",                       '\u{03A4}'),
    ("Theta",                     '\u{0398}'),
    ("Upsilon",                   '\u{03A5}'),
    ("Xi",                        '\u{039E}'),
    ("Zeta",                      '\u{0396}'),
    ("acute",                     '\u{00B4}'),
    ("ae",                        '\u{00E6}'),
    ("aleph",                     '\u{2135}'),
    ("alpha",                     '\u{03B1}'),
    ("ampersand",                 '\u{0026}'),
    ("angle",                     '\u{2220}'),
    ("angleleft",                 '\u{2329}'),
    ("angleright",                '\u{232A}'),
    ("approxequal",               '\u{2248}'),
    ("aring",                     '\u{00E5}'),
    ("arrowboth",                 '\u{2194}'),
    ("arrowdblboth",              '\u{21D4}'),
    ("arrowdbldown",              '\u{21D3}'),
    ("arrowdblleft",              '\u{21D0}'),
    ("arrowdblright",             '\u{21D2}'),
    ("arrowdblup",                '\u{21D1}'),
    ("arrowdown",                 '\u{2193}'),
    ("arrowleft",                 '\u{2190}'),
    ("arrowright",                '\u{2192}'),
    ("arrowup",                   '\u{2191}'),
    ("arrowupdn",                 '\u{2195}'),
    ("asciicircum",               '\u{005E}'),
    ("asciitilde",                '\u{007E}'),
    ("asterisk",                  '\u{002A}'),
    ("asteriskmath",              '\u{2217}'),
    ("at",                        '\u{0040}'),
    ("backslash",                 '\u{005C}'),
    ("bar",                       '\u{007C}'),
    ("beta",                      '\u{03B2}'),
    ("braceleft",                 '\u{007B}'),
    ("braceright",                '\u{007D}'),
    ("bracketleft",               '\u{005B}'),
    ("bracketright",              '\u{005D}'),
    ("breve",                     '\u{02D8}'),
    ("brokenbar",                 '\u{00A6}'),
    ("bullet",                    '\u{2022}'),
    ("caron",                     '\u{02C7}'),
    ("carriagereturn",            '\u{21B5}'),
    ("cedilla",                   '\u{00B8}'),
    ("cent",                      '\u{00A2}'),
    ("chi",                       '\u{03C7}'),
    ("circlemultiply",            '\u{2297}'),
    ("circleplus",                '\u{2295}'),
    ("circumflex",                '\u{02C6}'),
    ("club",                      '\u{2663}'),
    ("colon",                     '\u{003A}'),
    ("comma",                     '\u{002C}'),
    ("congruent",                 '\u{2245}'),
    ("copyright",                 '\u{00A9}'),
    ("currency",                  '\u{00A4}'),
    ("dagger",                    '\u{2020}'),
    ("daggerdbl",                 '\u{2021}'),
    ("degree",                    '\u{00B0}'),
    ("delta",                     '\u{03B4}'),
    ("diamond",                   '\u{2666}'),
    ("dieresis",                  '\u{00A8}'),
    ("divide",                    '\u{00F7}'),
    ("dollar",                    '\u{0024}'),
    ("dotaccent",                 '\u{02D9}'),
    ("dotlessi",                  '\u{0131}'),
    ("dotmath",                   '\u{22C5}'),
    ("eight",                     '\u{0038}'),
    ("element",                   '\u{2208}'),
    ("ellipsis",                  '\u{2026}'),
    ("emdash",                    '\u{2014}'),
    ("emptyset",                  '\u{2205}'),
    ("endash",                    '\u{2013}'),
    ("epsilon",                   '\u{03B5}'),
    ("equal",                     '\u{003D}'),
    ("equivalence",               '\u{2261}'),
    ("eta",                       '\u{03B7}'),
    ("exclam",                    '\u{0021}'),
    ("exclamdown",                '\u{00A1}'),
    ("existential",               '\u{2203}'),
    ("five",                      '\u{0035}'),
    ("florin",                    '\u{0192}'),
    ("four",                      '\u{0034}'),
    ("fraction",                  '\u{2044}'),
    ("gamma",                     '\u{03B3}'),
    ("germandbls",                '\u{00DF}'),
    ("gradient",                  '\u{2207}'),
    ("grave",                     '\u{0060}'),
    ("greater",                   '\u{003E}'),
    ("greaterequal",              '\u{2265}'),
    ("guillemotleft",             '\u{00AB}'),
    ("guillemotright",            '\u{00BB}'),
    ("heart",                     '\u{2665}'),
    ("hyphen",                    '\u{002D}'),
    ("infinity",                  '\u{221E}'),
    ("integral",                  '\u{222B}'),
    ("intersection",              '\u{2229}'),
    ("iota",                      '\u{03B9}'),
    ("kappa",                     '\u{03BA}'),
    ("lambda",                    '\u{03BB}'),
    ("less",                      '\u{003C}'),
    ("lessequal",                 '\u{2264}'),
    ("logicaland",                '\u{2227}'),
    ("logicalnot",                '\u{00AC}'),
    ("logicalor",                 '\u{2228}'),
    ("lozenge",                   '\u{25CA}'),
    ("macron",                    '\u{00AF}'),
    ("minus",                     '\u{2212}'),
    ("minute",                    '\u{2032}'),
    ("mu",                        '\u{00B5}'),
    ("multiply",                  '\u{00D7}'),
    ("nine",                      '\u{0039}'),
    ("notelement",                '\u{2209}'),
    ("notequal",                  '\u{2260}'),
    ("notsubset",                 '\u{2284}'),
    ("nu",                        '\u{03BD}'),
    ("numbersign",                '\u{0023}'),
    ("omega",                     '\u{03C9}'),
    ("omega1",                    '\u{03D6}'),
    ("omicron",                   '\u{03BF}'),
    ("one",                       '\u{0031}'),
    ("onehalf",                   '\u{00BD}'),
    ("onequarter",                '\u{00BC}'),
    ("onesuperior",               '\u{00B9}'),
    ("ordfeminine",               '\u{00AA}'),
    ("ordmasculine",              '\u{00BA}'),
    ("oslash",                    '\u{00F8}'),
    ("paragraph",                 '\u{00B6}'),
    ("parenleft",                 '\u{0028}'),
    ("parenright",                '\u{0029}'),
    ("partialdiff",               '\u{2202}'),
    ("percent",                   '\u{0025}'),
    ("period",                    '\u{002E}'),
    ("periodcentered",            '\u{00B7}'),
    ("perpendicular",             '\u{22A5}'),
    ("perthousand",               '\u{2030}'),
    ("phi",                       '\u{03C6}'),
    ("phi1",                      '\u{03D5}'),
    ("pi",                        '\u{03C0}'),
    ("plus",                      '\u{002B}'),
    ("plusminus",                 '\u{00B1}'),
    ("product",                   '\u{220F}'),
    ("propersubset",              '\u{2282}'),
    ("propersuperset",            '\u{2283}'),
    ("proportional",              '\u{221D}'),
    ("psi",                       '\u{03C8}'),
    ("question",                  '\u{003F}'),
    ("questiondown",              '\u{00BF}'),
    ("quotedbl",                  '\u{0022}'),
    ("quotedblleft",              '\u{201C}'),
    ("quotedblright",             '\u{201D}'),
    ("quoteleft",                 '\u{2018}'),
    ("quoteright",                '\u{2019}'),
    ("quotesingle",               '\u{0027}'),
    ("radical",                   '\u{221A}'),
    ("reflexsubset",              '\u{2286}'),
    ("reflexsuperset",            '\u{2287}'),
    ("registered",                '\u{00AE}'),
    ("rho",                       '\u{03C1}'),
    ("ring",                      '\u{02DA}'),
    ("second",                    '\u{2033}'),
    ("section",                   '\u{00A7}'),
    ("semicolon",                 '\u{003B}'),
    ("seven",                     '\u{0037}'),
    ("sigma",                     '\u{03C3}'),
    ("sigma1",                    '\u{03C2}'),
    ("similar",                   '\u{223C}'),
    ("six",                       '\u{0036}'),
    ("slash",                     '\u{002F}'),
    ("space",                     '\u{0020}'),
    ("spade",                     '\u{2660}'),
    ("sterling",                  '\u{00A3}'),
    ("suchthat",                  '\u{220B}'),
    ("summation",                 '\u{2211}'),
    ("tau",                       '\u{03C4}'),
    ("therefore",                 '\u{2234}'),
    ("theta",                     '\u{03B8}'),
    ("theta1",                    '\u{03D1}'),
    ("three",                     '\u{0033}'),
    ("threequarters",             '\u{00BE}'),
    ("threesuperior",             '\u{00B3}'),
    ("tilde",                     '\u{02DC}'),
    ("trademark",                 '\u{2122}'),
    ("two",                       '\u{0032}'),
    ("twosuperior",               '\u{00B2}'),
    ("underscore",                '\u{005F}'),
    ("union",                     '\u{222A}'),
    ("universal",                 '\u{2200}'),
    ("upsilon",                   '\u{03C5}'),
    ("weierstrass",               '\u{2118}'),
    ("xi",                        '\u{03BE}'),
    ("yen",                       '\u{00A5}'),
    ("zero",                      '\u{0030}'),
    ("zeta",                      '\u{03B6}'),
];
