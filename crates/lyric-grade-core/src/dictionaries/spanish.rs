//! Spanish tables.

use super::{LanguageTables, LexEntry, PUNCTUATION};
use crate::conjugation::{ConjugationTables, IrregularVerb, VerbClass};
use crate::idioms::Idiom;
use crate::morphology::PartOfSpeech::{
    Adjective, Adverb, Article, Conjunction, Determiner, Noun, Number, Pronoun, Preposition, Verb,
};
use crate::morphology::TenseMood::{Imperfect, Present, Preterite, Subjunctive};
use crate::tokenizer::TokenizerRules;

/// Spanish resources.
pub static TABLES: LanguageTables = LanguageTables {
    rules: TokenizerRules {
        elisions: &[],
        expansions: &[
            ("pa'", "para"),
            ("p'", "para"),
            ("na'", "nada"),
            ("to'", "todo"),
            ("toa'", "toda"),
            ("'tá", "está"),
            ("'toy", "estoy"),
            ("'tás", "estás"),
            ("ná", "nada"),
        ],
        punctuation: PUNCTUATION,
        letters: "áéíóúüñ",
    },
    lexicon: LEXICON,
    verbs: VERBS,
    conjugation: ConjugationTables {
        classes: &[
            VerbClass {
                infinitive: "ar",
                participle: "ado",
                future_trim: "",
                present: ["o", "as", "a", "amos", "áis", "an"],
                preterite: ["é", "aste", "ó", "amos", "asteis", "aron"],
                imperfect: ["aba", "abas", "aba", "ábamos", "abais", "aban"],
                subjunctive: ["e", "es", "e", "emos", "éis", "en"],
            },
            VerbClass {
                infinitive: "er",
                participle: "ido",
                future_trim: "",
                present: ["o", "es", "e", "emos", "éis", "en"],
                preterite: ["í", "iste", "ió", "imos", "isteis", "ieron"],
                imperfect: ["ía", "ías", "ía", "íamos", "íais", "ían"],
                subjunctive: ["a", "as", "a", "amos", "áis", "an"],
            },
            VerbClass {
                infinitive: "ir",
                participle: "ido",
                future_trim: "",
                present: ["o", "es", "e", "imos", "ís", "en"],
                preterite: ["í", "iste", "ió", "imos", "isteis", "ieron"],
                imperfect: ["ía", "ías", "ía", "íamos", "íais", "ían"],
                subjunctive: ["a", "as", "a", "amos", "áis", "an"],
            },
        ],
        future: ["é", "ás", "á", "emos", "éis", "án"],
        conditional: ["ía", "ías", "ía", "íamos", "íais", "ían"],
        auxiliary: "haber",
        alternate_auxiliary: None,
        participle_agreement: &[],
        irregulars: IRREGULARS,
    },
    frequencies: FREQUENCIES,
    idioms: IDIOMS,
    subordinators: &[
        "que", "porque", "aunque", "cuando", "si", "mientras", "donde", "pues", "cual", "quien",
    ],
    auxiliaries: &["ser", "estar", "haber"],
    perfect_auxiliaries: &["haber"],
    plural_suffixes: &["es", "s"],
};

const LEXICON: &[LexEntry] = &[
    // Articles
    ("el", "el", Article),
    ("la", "el", Article),
    ("los", "el", Article),
    ("las", "el", Article),
    ("un", "un", Article),
    ("una", "un", Article),
    ("unos", "un", Article),
    ("unas", "un", Article),
    // Pronouns
    ("yo", "yo", Pronoun),
    ("tú", "tú", Pronoun),
    ("él", "él", Pronoun),
    ("ella", "ella", Pronoun),
    ("ello", "ello", Pronoun),
    ("nosotros", "nosotros", Pronoun),
    ("nosotras", "nosotros", Pronoun),
    ("vosotros", "vosotros", Pronoun),
    ("ellos", "ellos", Pronoun),
    ("ellas", "ellos", Pronoun),
    ("usted", "usted", Pronoun),
    ("ustedes", "usted", Pronoun),
    ("me", "me", Pronoun),
    ("te", "te", Pronoun),
    ("se", "se", Pronoun),
    ("nos", "nos", Pronoun),
    ("os", "os", Pronoun),
    ("lo", "lo", Pronoun),
    ("le", "le", Pronoun),
    ("les", "le", Pronoun),
    ("mí", "mí", Pronoun),
    ("ti", "ti", Pronoun),
    ("sí", "sí", Adverb),
    ("conmigo", "conmigo", Pronoun),
    ("contigo", "contigo", Pronoun),
    ("qué", "qué", Pronoun),
    ("quién", "quién", Pronoun),
    ("quien", "quien", Pronoun),
    ("nada", "nada", Pronoun),
    ("nadie", "nadie", Pronoun),
    ("algo", "algo", Pronoun),
    ("alguien", "alguien", Pronoun),
    // Prepositions
    ("a", "a", Preposition),
    ("ante", "ante", Preposition),
    ("bajo", "bajo", Preposition),
    ("con", "con", Preposition),
    ("contra", "contra", Preposition),
    ("de", "de", Preposition),
    ("del", "de", Preposition),
    ("al", "a", Preposition),
    ("desde", "desde", Preposition),
    ("en", "en", Preposition),
    ("entre", "entre", Preposition),
    ("hacia", "hacia", Preposition),
    ("hasta", "hasta", Preposition),
    ("para", "para", Preposition),
    ("por", "por", Preposition),
    ("según", "según", Preposition),
    ("sin", "sin", Preposition),
    ("sobre", "sobre", Preposition),
    ("tras", "tras", Preposition),
    // Conjunctions
    ("y", "y", Conjunction),
    ("e", "y", Conjunction),
    ("o", "o", Conjunction),
    ("u", "o", Conjunction),
    ("que", "que", Conjunction),
    ("porque", "porque", Conjunction),
    ("aunque", "aunque", Conjunction),
    ("pero", "pero", Conjunction),
    ("sino", "sino", Conjunction),
    ("si", "si", Conjunction),
    ("cuando", "cuando", Conjunction),
    ("como", "como", Conjunction),
    ("mientras", "mientras", Conjunction),
    ("pues", "pues", Conjunction),
    ("ni", "ni", Conjunction),
    ("donde", "donde", Conjunction),
    // Determiners
    ("este", "este", Determiner),
    ("esta", "este", Determiner),
    ("estos", "este", Determiner),
    ("estas", "este", Determiner),
    ("ese", "ese", Determiner),
    ("esa", "ese", Determiner),
    ("esos", "ese", Determiner),
    ("esas", "ese", Determiner),
    ("aquel", "aquel", Determiner),
    ("aquella", "aquel", Determiner),
    ("mi", "mi", Determiner),
    ("mis", "mi", Determiner),
    ("tu", "tu", Determiner),
    ("tus", "tu", Determiner),
    ("su", "su", Determiner),
    ("sus", "su", Determiner),
    ("nuestro", "nuestro", Determiner),
    ("nuestra", "nuestro", Determiner),
    ("todo", "todo", Determiner),
    ("toda", "todo", Determiner),
    ("todos", "todo", Determiner),
    ("todas", "todo", Determiner),
    ("otro", "otro", Determiner),
    ("otra", "otro", Determiner),
    ("mucho", "mucho", Determiner),
    ("mucha", "mucho", Determiner),
    ("muchos", "mucho", Determiner),
    ("cada", "cada", Determiner),
    ("algún", "alguno", Determiner),
    ("ningún", "ninguno", Determiner),
    ("cualquier", "cualquier", Determiner),
    // Numbers
    ("uno", "uno", Number),
    ("dos", "dos", Number),
    ("tres", "tres", Number),
    ("cuatro", "cuatro", Number),
    ("cinco", "cinco", Number),
    ("seis", "seis", Number),
    ("siete", "siete", Number),
    ("ocho", "ocho", Number),
    ("nueve", "nueve", Number),
    ("diez", "diez", Number),
    ("cien", "cien", Number),
    ("mil", "mil", Number),
    // Adverbs
    ("no", "no", Adverb),
    ("muy", "muy", Adverb),
    ("más", "más", Adverb),
    ("menos", "menos", Adverb),
    ("ya", "ya", Adverb),
    ("nunca", "nunca", Adverb),
    ("jamás", "jamás", Adverb),
    ("siempre", "siempre", Adverb),
    ("también", "también", Adverb),
    ("tampoco", "tampoco", Adverb),
    ("aquí", "aquí", Adverb),
    ("allí", "allí", Adverb),
    ("ahí", "ahí", Adverb),
    ("hoy", "hoy", Adverb),
    ("ayer", "ayer", Adverb),
    ("ahora", "ahora", Adverb),
    ("bien", "bien", Adverb),
    ("mal", "mal", Adverb),
    ("así", "así", Adverb),
    ("tan", "tan", Adverb),
    ("solo", "solo", Adverb),
    ("después", "después", Adverb),
    ("antes", "antes", Adverb),
    ("luego", "luego", Adverb),
    ("casi", "casi", Adverb),
    ("todavía", "todavía", Adverb),
    ("aún", "aún", Adverb),
    ("dónde", "dónde", Adverb),
    ("cómo", "cómo", Adverb),
    ("cuándo", "cuándo", Adverb),
    ("lejos", "lejos", Adverb),
    ("cerca", "cerca", Adverb),
    ("mañana", "mañana", Adverb),
    ("mañana", "mañana", Noun),
    // Impersonal haber
    ("hay", "haber", Verb),
    // Nouns
    ("amor", "amor", Noun),
    ("corazón", "corazón", Noun),
    ("corazones", "corazón", Noun),
    ("vida", "vida", Noun),
    ("noche", "noche", Noun),
    ("día", "día", Noun),
    ("tiempo", "tiempo", Noun),
    ("camino", "camino", Noun),
    ("calle", "calle", Noun),
    ("mundo", "mundo", Noun),
    ("mar", "mar", Noun),
    ("cielo", "cielo", Noun),
    ("sol", "sol", Noun),
    ("luna", "luna", Noun),
    ("alma", "alma", Noun),
    ("beso", "beso", Noun),
    ("boca", "boca", Noun),
    ("ojo", "ojo", Noun),
    ("mano", "mano", Noun),
    ("piel", "piel", Noun),
    ("fuego", "fuego", Noun),
    ("luz", "luz", Noun),
    ("luces", "luz", Noun),
    ("sueño", "sueño", Noun),
    ("canción", "canción", Noun),
    ("canciones", "canción", Noun),
    ("casa", "casa", Noun),
    ("tierra", "tierra", Noun),
    ("agua", "agua", Noun),
    ("viento", "viento", Noun),
    ("voz", "voz", Noun),
    ("dolor", "dolor", Noun),
    ("mujer", "mujer", Noun),
    ("hombre", "hombre", Noun),
    ("niña", "niña", Noun),
    ("niño", "niño", Noun),
    ("cuerpo", "cuerpo", Noun),
    ("lluvia", "lluvia", Noun),
    ("fiesta", "fiesta", Noun),
    ("ciudad", "ciudad", Noun),
    ("gente", "gente", Noun),
    ("razón", "razón", Noun),
    ("verdad", "verdad", Noun),
    ("mentira", "mentira", Noun),
    ("recuerdo", "recuerdo", Noun),
    ("momento", "momento", Noun),
    ("vez", "vez", Noun),
    ("veces", "vez", Noun),
    ("cuenta", "cuenta", Noun),
    ("pelo", "pelo", Noun),
    ("pena", "pena", Noun),
    ("naranja", "naranja", Noun),
    ("ganas", "gana", Noun),
    ("caso", "caso", Noun),
    ("cabeza", "cabeza", Noun),
    ("nube", "nube", Noun),
    ("vuelta", "vuelta", Noun),
    ("vino", "vino", Noun),
    ("cariño", "cariño", Noun),
    ("libertad", "libertad", Noun),
    ("silencio", "silencio", Noun),
    ("destino", "destino", Noun),
    ("guitarra", "guitarra", Noun),
    ("muerte", "muerte", Noun),
    ("madre", "madre", Noun),
    ("padre", "padre", Noun),
    ("flor", "flor", Noun),
    ("estrella", "estrella", Noun),
    ("ritmo", "ritmo", Noun),
    ("baile", "baile", Noun),
    ("lágrima", "lágrima", Noun),
    ("embargo", "embargo", Noun),
    ("fin", "fin", Noun),
    // Adjectives
    ("bueno", "bueno", Adjective),
    ("buena", "bueno", Adjective),
    ("buen", "bueno", Adjective),
    ("malo", "malo", Adjective),
    ("mala", "malo", Adjective),
    ("grande", "grande", Adjective),
    ("gran", "grande", Adjective),
    ("pequeño", "pequeño", Adjective),
    ("pequeña", "pequeño", Adjective),
    ("nuevo", "nuevo", Adjective),
    ("nueva", "nuevo", Adjective),
    ("viejo", "viejo", Adjective),
    ("vieja", "viejo", Adjective),
    ("largo", "largo", Adjective),
    ("larga", "largo", Adjective),
    ("corto", "corto", Adjective),
    ("bonito", "bonito", Adjective),
    ("bonita", "bonito", Adjective),
    ("hermoso", "hermoso", Adjective),
    ("hermosa", "hermoso", Adjective),
    ("triste", "triste", Adjective),
    ("feliz", "feliz", Adjective),
    ("felices", "feliz", Adjective),
    ("sola", "solo", Adjective),
    ("loco", "loco", Adjective),
    ("loca", "loco", Adjective),
    ("lindo", "lindo", Adjective),
    ("linda", "lindo", Adjective),
    ("dulce", "dulce", Adjective),
    ("frío", "frío", Adjective),
    ("fría", "frío", Adjective),
    ("caliente", "caliente", Adjective),
    ("negro", "negro", Adjective),
    ("negra", "negro", Adjective),
    ("blanco", "blanco", Adjective),
    ("blanca", "blanco", Adjective),
    ("rojo", "rojo", Adjective),
    ("azul", "azul", Adjective),
    ("mejor", "mejor", Adjective),
    ("peor", "peor", Adjective),
    ("último", "último", Adjective),
    ("última", "último", Adjective),
    ("primero", "primero", Adjective),
    ("primera", "primero", Adjective),
    ("media", "medio", Adjective),
    ("medio", "medio", Adjective),
    ("igual", "igual", Adjective),
    ("eterno", "eterno", Adjective),
    ("eterna", "eterno", Adjective),
    ("repente", "repente", Adjective),
];

const VERBS: &[&str] = &[
    // -ar
    "hablar",
    "cantar",
    "bailar",
    "amar",
    "caminar",
    "mirar",
    "llorar",
    "esperar",
    "llamar",
    "llevar",
    "dejar",
    "quedar",
    "pasar",
    "tomar",
    "gustar",
    "besar",
    "olvidar",
    "necesitar",
    "trabajar",
    "andar",
    "entrar",
    "escuchar",
    "cambiar",
    "terminar",
    "matar",
    "gritar",
    "brillar",
    "robar",
    "extrañar",
    "enamorar",
    "acabar",
    "ayudar",
    "echar",
    "regresar",
    "bajar",
    "mandar",
    "soportar",
    "respirar",
    // -er
    "comer",
    "beber",
    "correr",
    "aprender",
    "vender",
    "creer",
    "leer",
    "meter",
    "temer",
    "romper",
    "deber",
    "valer",
    "responder",
    "comprender",
    // -ir
    "vivir",
    "escribir",
    "abrir",
    "subir",
    "recibir",
    "decidir",
    "sufrir",
    "partir",
    "existir",
    "compartir",
];

const IRREGULARS: &[IrregularVerb] = &[
    IrregularVerb {
        lemma: "ser",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["soy", "eres", "es", "somos", "sois", "son"]),
            (Preterite, ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
            (Imperfect, ["era", "eras", "era", "éramos", "erais", "eran"]),
            (Subjunctive, ["sea", "seas", "sea", "seamos", "seáis", "sean"]),
        ],
    },
    IrregularVerb {
        lemma: "estar",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["estoy", "estás", "está", "estamos", "estáis", "están"]),
            (
                Preterite,
                ["estuve", "estuviste", "estuvo", "estuvimos", "estuvisteis", "estuvieron"],
            ),
            (Subjunctive, ["esté", "estés", "esté", "estemos", "estéis", "estén"]),
        ],
    },
    IrregularVerb {
        lemma: "ir",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["voy", "vas", "va", "vamos", "vais", "van"]),
            (Preterite, ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
            (Imperfect, ["iba", "ibas", "iba", "íbamos", "ibais", "iban"]),
            (Subjunctive, ["vaya", "vayas", "vaya", "vayamos", "vayáis", "vayan"]),
        ],
    },
    IrregularVerb {
        lemma: "haber",
        participle: None,
        future_stem: Some("habr"),
        rows: &[
            (Present, ["he", "has", "ha", "hemos", "habéis", "han"]),
            (Preterite, ["hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron"]),
            (Subjunctive, ["haya", "hayas", "haya", "hayamos", "hayáis", "hayan"]),
        ],
    },
    IrregularVerb {
        lemma: "tener",
        participle: None,
        future_stem: Some("tendr"),
        rows: &[
            (Present, ["tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen"]),
            (Preterite, ["tuve", "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron"]),
            (Subjunctive, ["tenga", "tengas", "tenga", "tengamos", "tengáis", "tengan"]),
        ],
    },
    IrregularVerb {
        lemma: "hacer",
        participle: Some("hecho"),
        future_stem: Some("har"),
        rows: &[
            (Present, ["hago", "haces", "hace", "hacemos", "hacéis", "hacen"]),
            (Preterite, ["hice", "hiciste", "hizo", "hicimos", "hicisteis", "hicieron"]),
            (Subjunctive, ["haga", "hagas", "haga", "hagamos", "hagáis", "hagan"]),
        ],
    },
    IrregularVerb {
        lemma: "poder",
        participle: None,
        future_stem: Some("podr"),
        rows: &[
            (Present, ["puedo", "puedes", "puede", "podemos", "podéis", "pueden"]),
            (Preterite, ["pude", "pudiste", "pudo", "pudimos", "pudisteis", "pudieron"]),
            (Subjunctive, ["pueda", "puedas", "pueda", "podamos", "podáis", "puedan"]),
        ],
    },
    IrregularVerb {
        lemma: "decir",
        participle: Some("dicho"),
        future_stem: Some("dir"),
        rows: &[
            (Present, ["digo", "dices", "dice", "decimos", "decís", "dicen"]),
            (Preterite, ["dije", "dijiste", "dijo", "dijimos", "dijisteis", "dijeron"]),
            (Subjunctive, ["diga", "digas", "diga", "digamos", "digáis", "digan"]),
        ],
    },
    IrregularVerb {
        lemma: "querer",
        participle: None,
        future_stem: Some("querr"),
        rows: &[
            (Present, ["quiero", "quieres", "quiere", "queremos", "queréis", "quieren"]),
            (Preterite, ["quise", "quisiste", "quiso", "quisimos", "quisisteis", "quisieron"]),
            (Subjunctive, ["quiera", "quieras", "quiera", "queramos", "queráis", "quieran"]),
        ],
    },
    IrregularVerb {
        lemma: "saber",
        participle: None,
        future_stem: Some("sabr"),
        rows: &[
            (Present, ["sé", "sabes", "sabe", "sabemos", "sabéis", "saben"]),
            (Preterite, ["supe", "supiste", "supo", "supimos", "supisteis", "supieron"]),
            (Subjunctive, ["sepa", "sepas", "sepa", "sepamos", "sepáis", "sepan"]),
        ],
    },
    IrregularVerb {
        lemma: "venir",
        participle: None,
        future_stem: Some("vendr"),
        rows: &[
            (Present, ["vengo", "vienes", "viene", "venimos", "venís", "vienen"]),
            (Preterite, ["vine", "viniste", "vino", "vinimos", "vinisteis", "vinieron"]),
            (Subjunctive, ["venga", "vengas", "venga", "vengamos", "vengáis", "vengan"]),
        ],
    },
    IrregularVerb {
        lemma: "dar",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["doy", "das", "da", "damos", "dais", "dan"]),
            (Preterite, ["di", "diste", "dio", "dimos", "disteis", "dieron"]),
            (Subjunctive, ["dé", "des", "dé", "demos", "deis", "den"]),
        ],
    },
    IrregularVerb {
        lemma: "ver",
        participle: Some("visto"),
        future_stem: None,
        rows: &[
            (Present, ["veo", "ves", "ve", "vemos", "veis", "ven"]),
            (Preterite, ["vi", "viste", "vio", "vimos", "visteis", "vieron"]),
            (Imperfect, ["veía", "veías", "veía", "veíamos", "veíais", "veían"]),
            (Subjunctive, ["vea", "veas", "vea", "veamos", "veáis", "vean"]),
        ],
    },
    IrregularVerb {
        lemma: "poner",
        participle: Some("puesto"),
        future_stem: Some("pondr"),
        rows: &[
            (Present, ["pongo", "pones", "pone", "ponemos", "ponéis", "ponen"]),
            (Preterite, ["puse", "pusiste", "puso", "pusimos", "pusisteis", "pusieron"]),
            (Subjunctive, ["ponga", "pongas", "ponga", "pongamos", "pongáis", "pongan"]),
        ],
    },
    IrregularVerb {
        lemma: "salir",
        participle: None,
        future_stem: Some("saldr"),
        rows: &[
            (Present, ["salgo", "sales", "sale", "salimos", "salís", "salen"]),
            (Subjunctive, ["salga", "salgas", "salga", "salgamos", "salgáis", "salgan"]),
        ],
    },
    IrregularVerb {
        lemma: "sentir",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["siento", "sientes", "siente", "sentimos", "sentís", "sienten"]),
            (Preterite, ["sentí", "sentiste", "sintió", "sentimos", "sentisteis", "sintieron"]),
            (Subjunctive, ["sienta", "sientas", "sienta", "sintamos", "sintáis", "sientan"]),
        ],
    },
    IrregularVerb {
        lemma: "pensar",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["pienso", "piensas", "piensa", "pensamos", "pensáis", "piensan"]),
            (Subjunctive, ["piense", "pienses", "piense", "pensemos", "penséis", "piensen"]),
        ],
    },
    IrregularVerb {
        lemma: "volver",
        participle: Some("vuelto"),
        future_stem: None,
        rows: &[
            (Present, ["vuelvo", "vuelves", "vuelve", "volvemos", "volvéis", "vuelven"]),
            (Subjunctive, ["vuelva", "vuelvas", "vuelva", "volvamos", "volváis", "vuelvan"]),
        ],
    },
    IrregularVerb {
        lemma: "dormir",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["duermo", "duermes", "duerme", "dormimos", "dormís", "duermen"]),
            (Preterite, ["dormí", "dormiste", "durmió", "dormimos", "dormisteis", "durmieron"]),
            (Subjunctive, ["duerma", "duermas", "duerma", "durmamos", "durmáis", "duerman"]),
        ],
    },
    IrregularVerb {
        lemma: "morir",
        participle: Some("muerto"),
        future_stem: None,
        rows: &[
            (Present, ["muero", "mueres", "muere", "morimos", "morís", "mueren"]),
            (Preterite, ["morí", "moriste", "murió", "morimos", "moristeis", "murieron"]),
            (Subjunctive, ["muera", "mueras", "muera", "muramos", "muráis", "mueran"]),
        ],
    },
    IrregularVerb {
        lemma: "encontrar",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["encuentro", "encuentras", "encuentra", "encontramos", "encontráis", "encuentran"]),
            (Subjunctive, ["encuentre", "encuentres", "encuentre", "encontremos", "encontréis", "encuentren"]),
        ],
    },
    IrregularVerb {
        lemma: "recordar",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["recuerdo", "recuerdas", "recuerda", "recordamos", "recordáis", "recuerdan"]),
            (Subjunctive, ["recuerde", "recuerdes", "recuerde", "recordemos", "recordéis", "recuerden"]),
        ],
    },
    IrregularVerb {
        lemma: "soñar",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["sueño", "sueñas", "sueña", "soñamos", "soñáis", "sueñan"]),
            (Subjunctive, ["sueñe", "sueñes", "sueñe", "soñemos", "soñéis", "sueñen"]),
        ],
    },
    IrregularVerb {
        lemma: "perder",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["pierdo", "pierdes", "pierde", "perdemos", "perdéis", "pierden"]),
            (Subjunctive, ["pierda", "pierdas", "pierda", "perdamos", "perdáis", "pierdan"]),
        ],
    },
    IrregularVerb {
        lemma: "entender",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["entiendo", "entiendes", "entiende", "entendemos", "entendéis", "entienden"]),
            (Subjunctive, ["entienda", "entiendas", "entienda", "entendamos", "entendáis", "entiendan"]),
        ],
    },
    IrregularVerb {
        lemma: "conocer",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["conozco", "conoces", "conoce", "conocemos", "conocéis", "conocen"]),
            (Subjunctive, ["conozca", "conozcas", "conozca", "conozcamos", "conozcáis", "conozcan"]),
        ],
    },
    IrregularVerb {
        lemma: "escribir",
        participle: Some("escrito"),
        future_stem: None,
        rows: &[],
    },
    IrregularVerb {
        lemma: "abrir",
        participle: Some("abierto"),
        future_stem: None,
        rows: &[],
    },
    IrregularVerb {
        lemma: "romper",
        participle: Some("roto"),
        future_stem: None,
        rows: &[],
    },
];

const FREQUENCIES: &[(&str, f64)] = &[
    ("de", 7.49),
    ("la", 7.37),
    ("que", 7.36),
    ("el", 7.29),
    ("en", 7.22),
    ("y", 7.21),
    ("a", 7.16),
    ("los", 6.94),
    ("se", 6.93),
    ("no", 6.92),
    ("un", 6.84),
    ("por", 6.80),
    ("con", 6.74),
    ("una", 6.73),
    ("me", 6.70),
    ("es", 6.69),
    ("lo", 6.62),
    ("para", 6.60),
    ("te", 6.58),
    ("las", 6.57),
    ("su", 6.55),
    ("del", 6.52),
    ("mi", 6.50),
    ("como", 6.48),
    ("al", 6.45),
    ("más", 6.42),
    ("pero", 6.36),
    ("yo", 6.33),
    ("tu", 6.25),
    ("si", 6.23),
    ("ya", 6.18),
    ("le", 6.16),
    ("todo", 6.12),
    ("muy", 6.08),
    ("bien", 6.04),
    ("qué", 6.03),
    ("está", 6.02),
    ("esta", 6.00),
    ("este", 5.97),
    ("cuando", 5.95),
    ("sí", 5.94),
    ("ser", 5.93),
    ("estar", 5.60),
    ("haber", 5.70),
    ("tener", 5.85),
    ("hacer", 5.80),
    ("ir", 5.82),
    ("poder", 5.78),
    ("decir", 5.70),
    ("querer", 5.62),
    ("saber", 5.55),
    ("ver", 5.75),
    ("dar", 5.52),
    ("venir", 5.30),
    ("quiero", 5.60),
    ("tengo", 5.55),
    ("soy", 5.50),
    ("eres", 5.45),
    ("voy", 5.42),
    ("nos", 6.10),
    ("tú", 5.90),
    ("él", 5.88),
    ("ella", 5.80),
    ("nada", 5.75),
    ("porque", 5.74),
    ("hay", 5.90),
    ("ahora", 5.65),
    ("siempre", 5.55),
    ("nunca", 5.42),
    ("amor", 5.45),
    ("vida", 5.50),
    ("noche", 5.20),
    ("día", 5.50),
    ("tiempo", 5.45),
    ("corazón", 5.05),
    ("mundo", 5.35),
    ("camino", 4.80),
    ("caminar", 4.30),
    ("calle", 4.85),
    ("casa", 5.30),
    ("hombre", 5.20),
    ("mujer", 5.10),
    ("gente", 5.10),
    ("verdad", 5.30),
    ("vez", 5.60),
    ("mar", 4.85),
    ("cielo", 4.75),
    ("sol", 4.80),
    ("luna", 4.45),
    ("alma", 4.50),
    ("beso", 4.30),
    ("boca", 4.50),
    ("ojo", 4.60),
    ("mano", 4.90),
    ("piel", 4.40),
    ("fuego", 4.60),
    ("luz", 4.80),
    ("sueño", 4.55),
    ("canción", 4.50),
    ("agua", 5.00),
    ("viento", 4.40),
    ("voz", 4.70),
    ("dolor", 4.60),
    ("cuerpo", 4.80),
    ("lluvia", 4.10),
    ("fiesta", 4.60),
    ("ciudad", 4.90),
    ("razón", 4.95),
    ("mentira", 4.40),
    ("recuerdo", 4.40),
    ("momento", 5.20),
    ("bueno", 5.45),
    ("malo", 4.60),
    ("grande", 4.90),
    ("nuevo", 5.00),
    ("largo", 4.60),
    ("triste", 4.30),
    ("feliz", 4.70),
    ("loco", 4.60),
    ("solo", 5.40),
    ("uno", 5.50),
    ("dos", 5.55),
    ("tres", 5.20),
    ("cuatro", 4.90),
    ("hablar", 5.10),
    ("cantar", 4.40),
    ("bailar", 4.30),
    ("amar", 4.30),
    ("mirar", 4.70),
    ("llorar", 4.30),
    ("esperar", 4.90),
    ("llamar", 4.80),
    ("pasar", 5.10),
    ("dejar", 5.10),
    ("vivir", 4.90),
    ("sentir", 4.80),
    ("pensar", 5.00),
    ("volver", 4.90),
    ("olvidar", 4.40),
    ("besar", 3.90),
    ("soñar", 3.90),
    ("perder", 4.70),
    ("morir", 4.60),
    ("comer", 4.60),
    ("beber", 4.10),
    ("creer", 5.10),
    ("conocer", 4.90),
    ("encontrar", 4.80),
    ("recordar", 4.50),
    ("extrañar", 3.60),
    ("embargo", 4.80),
    ("cuenta", 4.90),
    ("pena", 4.60),
];

const IDIOMS: &[Idiom] = &[
    Idiom::new("echar-de-menos", "echar de menos", "to miss someone"),
    Idiom::new("tomar-el-pelo", "tomar el pelo", "to pull someone's leg"),
    Idiom::new("a-lo-mejor", "a lo mejor", "maybe"),
    Idiom::new("sin-embargo", "sin embargo", "however"),
    Idiom::new("de-repente", "de repente", "suddenly"),
    Idiom::new("de-vez-en-cuando", "de vez en cuando", "from time to time"),
    Idiom::new("estar-en-las-nubes", "estar en las nubes", "to have one's head in the clouds"),
    Idiom::new("dar-la-vuelta", "dar la vuelta", "to turn around"),
    Idiom::new("poco-a-poco", "poco a poco", "little by little"),
    Idiom::new("media-naranja", "media naranja", "soulmate"),
    Idiom::new("hacer-caso", "hacer caso", "to pay attention"),
    Idiom::new("valer-la-pena", "valer la pena", "to be worth it"),
    Idiom::new("cada-vez-mas", "cada vez más", "more and more"),
    Idiom::new("otra-vez", "otra vez", "again"),
    Idiom::new("de-nuevo", "de nuevo", "again"),
    Idiom::new("tener-ganas-de", "tener ganas de", "to feel like doing something"),
    Idiom::new("dar-igual", "dar igual", "not to matter"),
    Idiom::new("en-vez-de", "en vez de", "instead of"),
    Idiom::new("por-fin", "por fin", "at last"),
    Idiom::new("darse-cuenta", "dar cuenta", "to realize"),
    Idiom::new("perder-la-cabeza", "perder la cabeza", "to lose one's mind"),
    Idiom::new("para-siempre", "para siempre", "forever"),
    Idiom::new("a-la-vez", "a la vez", "at the same time"),
    Idiom::new("no-hay-mal-que-por-bien-no-venga", "no hay mal que por bien no venga", "every cloud has a silver lining"),
];
