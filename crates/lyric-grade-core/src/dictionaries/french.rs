//! French tables.

use super::{LanguageTables, LexEntry, PUNCTUATION};
use crate::conjugation::{AlternateAuxiliary, ConjugationTables, IrregularVerb, VerbClass};
use crate::idioms::Idiom;
use crate::morphology::PartOfSpeech::{
    Adjective, Adverb, Article, Conjunction, Determiner, Noun, Number, Pronoun, Preposition, Verb,
};
use crate::morphology::TenseMood::{Imperfect, Present, Preterite, Subjunctive};
use crate::tokenizer::TokenizerRules;

/// French resources.
pub static TABLES: LanguageTables = LanguageTables {
    rules: TokenizerRules {
        elisions: &[
            "jusqu'", "lorsqu'", "puisqu'", "quoiqu'", "qu'", "l'", "j'", "d'", "m'", "t'", "s'",
            "c'", "n'",
        ],
        expansions: &[],
        punctuation: PUNCTUATION,
        letters: "àâäæçéèêëîïôöœùûüÿ",
    },
    lexicon: LEXICON,
    verbs: VERBS,
    conjugation: ConjugationTables {
        classes: &[
            VerbClass {
                infinitive: "er",
                participle: "é",
                future_trim: "",
                present: ["e", "es", "e", "ons", "ez", "ent"],
                preterite: ["ai", "as", "a", "âmes", "âtes", "èrent"],
                imperfect: ["ais", "ais", "ait", "ions", "iez", "aient"],
                subjunctive: ["e", "es", "e", "ions", "iez", "ent"],
            },
            VerbClass {
                infinitive: "ir",
                participle: "i",
                future_trim: "",
                present: ["is", "is", "it", "issons", "issez", "issent"],
                preterite: ["is", "is", "it", "îmes", "îtes", "irent"],
                imperfect: ["issais", "issais", "issait", "issions", "issiez", "issaient"],
                subjunctive: ["isse", "isses", "isse", "issions", "issiez", "issent"],
            },
            VerbClass {
                infinitive: "re",
                participle: "u",
                future_trim: "e",
                present: ["s", "s", "", "ons", "ez", "ent"],
                preterite: ["is", "is", "it", "îmes", "îtes", "irent"],
                imperfect: ["ais", "ais", "ait", "ions", "iez", "aient"],
                subjunctive: ["e", "es", "e", "ions", "iez", "ent"],
            },
        ],
        future: ["ai", "as", "a", "ons", "ez", "ont"],
        conditional: ["ais", "ais", "ait", "ions", "iez", "aient"],
        auxiliary: "avoir",
        alternate_auxiliary: Some(AlternateAuxiliary {
            verb: "être",
            lemmas: ETRE_VERBS,
            plural_agreement: "s",
        }),
        participle_agreement: &["es", "e", "s"],
        irregulars: IRREGULARS,
    },
    frequencies: FREQUENCIES,
    idioms: IDIOMS,
    subordinators: &[
        "que", "quand", "si", "comme", "lorsque", "puisque", "parce", "quoique", "où", "dont",
    ],
    auxiliaries: &["être", "avoir"],
    perfect_auxiliaries: &["avoir", "être"],
    plural_suffixes: &["s", "x"],
};

const LEXICON: &[LexEntry] = &[
    // Articles
    ("le", "le", Article),
    ("la", "le", Article),
    ("les", "le", Article),
    ("un", "un", Article),
    ("une", "un", Article),
    ("des", "un", Article),
    // Contracted prepositions
    ("du", "de", Preposition),
    ("au", "à", Preposition),
    ("aux", "à", Preposition),
    // Pronouns
    ("je", "je", Pronoun),
    ("tu", "tu", Pronoun),
    ("il", "il", Pronoun),
    ("elle", "elle", Pronoun),
    ("on", "on", Pronoun),
    ("nous", "nous", Pronoun),
    ("vous", "vous", Pronoun),
    ("ils", "il", Pronoun),
    ("elles", "elle", Pronoun),
    ("me", "me", Pronoun),
    ("te", "te", Pronoun),
    ("se", "se", Pronoun),
    ("moi", "moi", Pronoun),
    ("toi", "toi", Pronoun),
    ("lui", "lui", Pronoun),
    ("leur", "leur", Pronoun),
    ("eux", "eux", Pronoun),
    ("y", "y", Pronoun),
    ("ce", "ce", Pronoun),
    ("ça", "ça", Pronoun),
    ("cela", "cela", Pronoun),
    ("rien", "rien", Pronoun),
    ("personne", "personne", Pronoun),
    ("qui", "qui", Pronoun),
    ("quoi", "quoi", Pronoun),
    // Prepositions
    ("à", "à", Preposition),
    ("de", "de", Preposition),
    ("en", "en", Preposition),
    ("dans", "dans", Preposition),
    ("sur", "sur", Preposition),
    ("sous", "sous", Preposition),
    ("avec", "avec", Preposition),
    ("sans", "sans", Preposition),
    ("pour", "pour", Preposition),
    ("par", "par", Preposition),
    ("vers", "vers", Preposition),
    ("chez", "chez", Preposition),
    ("entre", "entre", Preposition),
    ("contre", "contre", Preposition),
    ("après", "après", Preposition),
    ("avant", "avant", Preposition),
    ("depuis", "depuis", Preposition),
    ("pendant", "pendant", Preposition),
    ("jusque", "jusque", Preposition),
    // Conjunctions
    ("et", "et", Conjunction),
    ("ou", "ou", Conjunction),
    ("mais", "mais", Conjunction),
    ("donc", "donc", Conjunction),
    ("car", "car", Conjunction),
    ("que", "que", Conjunction),
    ("quand", "quand", Conjunction),
    ("si", "si", Conjunction),
    ("comme", "comme", Conjunction),
    ("lorsque", "lorsque", Conjunction),
    ("puisque", "puisque", Conjunction),
    ("parce", "parce", Conjunction),
    ("ni", "ni", Conjunction),
    ("où", "où", Conjunction),
    // Determiners
    ("cet", "ce", Determiner),
    ("cette", "ce", Determiner),
    ("ces", "ce", Determiner),
    ("mon", "mon", Determiner),
    ("ma", "mon", Determiner),
    ("mes", "mon", Determiner),
    ("ton", "ton", Determiner),
    ("ta", "ton", Determiner),
    ("tes", "ton", Determiner),
    ("son", "son", Determiner),
    ("sa", "son", Determiner),
    ("ses", "son", Determiner),
    ("notre", "notre", Determiner),
    ("nos", "notre", Determiner),
    ("votre", "votre", Determiner),
    ("vos", "votre", Determiner),
    ("leurs", "leur", Determiner),
    ("tout", "tout", Determiner),
    ("toute", "tout", Determiner),
    ("tous", "tout", Determiner),
    ("toutes", "tout", Determiner),
    ("chaque", "chaque", Determiner),
    ("quelque", "quelque", Determiner),
    // Numbers
    ("deux", "deux", Number),
    ("trois", "trois", Number),
    ("quatre", "quatre", Number),
    ("cinq", "cinq", Number),
    ("six", "six", Number),
    ("sept", "sept", Number),
    ("huit", "huit", Number),
    ("neuf", "neuf", Number),
    ("dix", "dix", Number),
    ("cent", "cent", Number),
    ("mille", "mille", Number),
    // Adverbs
    ("ne", "ne", Adverb),
    ("pas", "pas", Adverb),
    ("plus", "plus", Adverb),
    ("jamais", "jamais", Adverb),
    ("toujours", "toujours", Adverb),
    ("encore", "encore", Adverb),
    ("très", "très", Adverb),
    ("bien", "bien", Adverb),
    ("mal", "mal", Adverb),
    ("déjà", "déjà", Adverb),
    ("ici", "ici", Adverb),
    ("là", "là", Adverb),
    ("aujourd'hui", "aujourd'hui", Adverb),
    ("demain", "demain", Adverb),
    ("hier", "hier", Adverb),
    ("maintenant", "maintenant", Adverb),
    ("trop", "trop", Adverb),
    ("peu", "peu", Adverb),
    ("beaucoup", "beaucoup", Adverb),
    ("aussi", "aussi", Adverb),
    ("souvent", "souvent", Adverb),
    ("loin", "loin", Adverb),
    ("près", "près", Adverb),
    ("alors", "alors", Adverb),
    ("marre", "marre", Adverb),
    ("oui", "oui", Adverb),
    ("non", "non", Adverb),
    // Presentative
    ("voici", "voici", Verb),
    ("voilà", "voilà", Verb),
    // Nouns
    ("amour", "amour", Noun),
    ("cœur", "cœur", Noun),
    ("vie", "vie", Noun),
    ("nuit", "nuit", Noun),
    ("jour", "jour", Noun),
    ("temps", "temps", Noun),
    ("monde", "monde", Noun),
    ("mer", "mer", Noun),
    ("ciel", "ciel", Noun),
    ("soleil", "soleil", Noun),
    ("lune", "lune", Noun),
    ("âme", "âme", Noun),
    ("baiser", "baiser", Noun),
    ("bouche", "bouche", Noun),
    ("œil", "œil", Noun),
    ("yeux", "œil", Noun),
    ("main", "main", Noun),
    ("peau", "peau", Noun),
    ("feu", "feu", Noun),
    ("lumière", "lumière", Noun),
    ("rêve", "rêve", Noun),
    ("chanson", "chanson", Noun),
    ("maison", "maison", Noun),
    ("terre", "terre", Noun),
    ("eau", "eau", Noun),
    ("vent", "vent", Noun),
    ("voix", "voix", Noun),
    ("douleur", "douleur", Noun),
    ("femme", "femme", Noun),
    ("homme", "homme", Noun),
    ("corps", "corps", Noun),
    ("pluie", "pluie", Noun),
    ("fête", "fête", Noun),
    ("ville", "ville", Noun),
    ("gens", "gens", Noun),
    ("raison", "raison", Noun),
    ("vérité", "vérité", Noun),
    ("souvenir", "souvenir", Noun),
    ("moment", "moment", Noun),
    ("fois", "fois", Noun),
    ("coup", "coup", Noun),
    ("foudre", "foudre", Noun),
    ("cafard", "cafard", Noun),
    ("chemin", "chemin", Noun),
    ("rue", "rue", Noun),
    ("larme", "larme", Noun),
    ("fin", "fin", Noun),
    ("mot", "mot", Noun),
    ("tête", "tête", Noun),
    ("vin", "vin", Noun),
    ("peine", "peine", Noun),
    ("fleur", "fleur", Noun),
    ("étoile", "étoile", Noun),
    // Adjectives
    ("beau", "beau", Adjective),
    ("belle", "beau", Adjective),
    ("bon", "bon", Adjective),
    ("bonne", "bon", Adjective),
    ("grand", "grand", Adjective),
    ("grande", "grand", Adjective),
    ("petit", "petit", Adjective),
    ("petite", "petit", Adjective),
    ("nouveau", "nouveau", Adjective),
    ("nouvelle", "nouveau", Adjective),
    ("vieux", "vieux", Adjective),
    ("vieille", "vieux", Adjective),
    ("long", "long", Adjective),
    ("longue", "long", Adjective),
    ("triste", "triste", Adjective),
    ("heureux", "heureux", Adjective),
    ("heureuse", "heureux", Adjective),
    ("fou", "fou", Adjective),
    ("folle", "fou", Adjective),
    ("doux", "doux", Adjective),
    ("douce", "doux", Adjective),
    ("seul", "seul", Adjective),
    ("seule", "seul", Adjective),
    ("noir", "noir", Adjective),
    ("blanc", "blanc", Adjective),
    ("rouge", "rouge", Adjective),
    ("bleu", "bleu", Adjective),
    ("meilleur", "meilleur", Adjective),
    ("dernier", "dernier", Adjective),
    ("dernière", "dernier", Adjective),
    ("premier", "premier", Adjective),
    ("première", "premier", Adjective),
];

const VERBS: &[&str] = &[
    // -er
    "parler",
    "aimer",
    "marcher",
    "chanter",
    "danser",
    "regarder",
    "pleurer",
    "rester",
    "passer",
    "penser",
    "trouver",
    "donner",
    "demander",
    "tomber",
    "oublier",
    "rêver",
    "chercher",
    "écouter",
    "rentrer",
    "entrer",
    "arriver",
    "garder",
    "jouer",
    "porter",
    "embrasser",
    "briller",
    "brûler",
    "sembler",
    "laisser",
    "changer",
    "manger",
    "travailler",
    "quitter",
    "raconter",
    "crier",
    "espérer",
    // -ir
    "finir",
    "choisir",
    "grandir",
    "réussir",
    "rougir",
    "vieillir",
    // -re
    "vendre",
    "attendre",
    "entendre",
    "perdre",
    "répondre",
    "descendre",
    "rendre",
];

/// Verbs of motion and change of state, conjugated with être.
const ETRE_VERBS: &[&str] = &[
    "aller",
    "venir",
    "devenir",
    "revenir",
    "partir",
    "arriver",
    "entrer",
    "rentrer",
    "sortir",
    "rester",
    "tomber",
    "retourner",
    "monter",
    "descendre",
    "naître",
    "mourir",
];

const IRREGULARS: &[IrregularVerb] = &[
    IrregularVerb {
        lemma: "être",
        participle: Some("été"),
        future_stem: Some("ser"),
        rows: &[
            (Present, ["suis", "es", "est", "sommes", "êtes", "sont"]),
            (Preterite, ["fus", "fus", "fut", "fûmes", "fûtes", "furent"]),
            (Imperfect, ["étais", "étais", "était", "étions", "étiez", "étaient"]),
            (Subjunctive, ["sois", "sois", "soit", "soyons", "soyez", "soient"]),
        ],
    },
    IrregularVerb {
        lemma: "avoir",
        participle: Some("eu"),
        future_stem: Some("aur"),
        rows: &[
            (Present, ["ai", "as", "a", "avons", "avez", "ont"]),
            (Preterite, ["eus", "eus", "eut", "eûmes", "eûtes", "eurent"]),
            (Imperfect, ["avais", "avais", "avait", "avions", "aviez", "avaient"]),
            (Subjunctive, ["aie", "aies", "ait", "ayons", "ayez", "aient"]),
        ],
    },
    IrregularVerb {
        lemma: "aller",
        participle: None,
        future_stem: Some("ir"),
        rows: &[
            (Present, ["vais", "vas", "va", "allons", "allez", "vont"]),
            (Subjunctive, ["aille", "ailles", "aille", "allions", "alliez", "aillent"]),
        ],
    },
    IrregularVerb {
        lemma: "faire",
        participle: Some("fait"),
        future_stem: Some("fer"),
        rows: &[
            (Present, ["fais", "fais", "fait", "faisons", "faites", "font"]),
            (Preterite, ["fis", "fis", "fit", "fîmes", "fîtes", "firent"]),
            (Imperfect, ["faisais", "faisais", "faisait", "faisions", "faisiez", "faisaient"]),
            (Subjunctive, ["fasse", "fasses", "fasse", "fassions", "fassiez", "fassent"]),
        ],
    },
    IrregularVerb {
        lemma: "pouvoir",
        participle: Some("pu"),
        future_stem: Some("pourr"),
        rows: &[
            (Present, ["peux", "peux", "peut", "pouvons", "pouvez", "peuvent"]),
            (Preterite, ["pus", "pus", "put", "pûmes", "pûtes", "purent"]),
            (Imperfect, ["pouvais", "pouvais", "pouvait", "pouvions", "pouviez", "pouvaient"]),
            (Subjunctive, ["puisse", "puisses", "puisse", "puissions", "puissiez", "puissent"]),
        ],
    },
    IrregularVerb {
        lemma: "vouloir",
        participle: Some("voulu"),
        future_stem: Some("voudr"),
        rows: &[
            (Present, ["veux", "veux", "veut", "voulons", "voulez", "veulent"]),
            (Preterite, ["voulus", "voulus", "voulut", "voulûmes", "voulûtes", "voulurent"]),
            (Imperfect, ["voulais", "voulais", "voulait", "voulions", "vouliez", "voulaient"]),
            (Subjunctive, ["veuille", "veuilles", "veuille", "voulions", "vouliez", "veuillent"]),
        ],
    },
    IrregularVerb {
        lemma: "savoir",
        participle: Some("su"),
        future_stem: Some("saur"),
        rows: &[
            (Present, ["sais", "sais", "sait", "savons", "savez", "savent"]),
            (Preterite, ["sus", "sus", "sut", "sûmes", "sûtes", "surent"]),
            (Imperfect, ["savais", "savais", "savait", "savions", "saviez", "savaient"]),
            (Subjunctive, ["sache", "saches", "sache", "sachions", "sachiez", "sachent"]),
        ],
    },
    IrregularVerb {
        lemma: "venir",
        participle: Some("venu"),
        future_stem: Some("viendr"),
        rows: &[
            (Present, ["viens", "viens", "vient", "venons", "venez", "viennent"]),
            (Preterite, ["vins", "vins", "vint", "vînmes", "vîntes", "vinrent"]),
            (Imperfect, ["venais", "venais", "venait", "venions", "veniez", "venaient"]),
            (Subjunctive, ["vienne", "viennes", "vienne", "venions", "veniez", "viennent"]),
        ],
    },
    IrregularVerb {
        lemma: "dire",
        participle: Some("dit"),
        future_stem: None,
        rows: &[
            (Present, ["dis", "dis", "dit", "disons", "dites", "disent"]),
            (Preterite, ["dis", "dis", "dit", "dîmes", "dîtes", "dirent"]),
            (Imperfect, ["disais", "disais", "disait", "disions", "disiez", "disaient"]),
            (Subjunctive, ["dise", "dises", "dise", "disions", "disiez", "disent"]),
        ],
    },
    IrregularVerb {
        lemma: "prendre",
        participle: Some("pris"),
        future_stem: None,
        rows: &[
            (Present, ["prends", "prends", "prend", "prenons", "prenez", "prennent"]),
            (Preterite, ["pris", "pris", "prit", "prîmes", "prîtes", "prirent"]),
            (Imperfect, ["prenais", "prenais", "prenait", "prenions", "preniez", "prenaient"]),
            (Subjunctive, ["prenne", "prennes", "prenne", "prenions", "preniez", "prennent"]),
        ],
    },
    IrregularVerb {
        lemma: "voir",
        participle: Some("vu"),
        future_stem: Some("verr"),
        rows: &[
            (Present, ["vois", "vois", "voit", "voyons", "voyez", "voient"]),
            (Preterite, ["vis", "vis", "vit", "vîmes", "vîtes", "virent"]),
            (Imperfect, ["voyais", "voyais", "voyait", "voyions", "voyiez", "voyaient"]),
            (Subjunctive, ["voie", "voies", "voie", "voyions", "voyiez", "voient"]),
        ],
    },
    IrregularVerb {
        lemma: "devoir",
        participle: Some("dû"),
        future_stem: Some("devr"),
        rows: &[
            (Present, ["dois", "dois", "doit", "devons", "devez", "doivent"]),
            (Preterite, ["dus", "dus", "dut", "dûmes", "dûtes", "durent"]),
            (Imperfect, ["devais", "devais", "devait", "devions", "deviez", "devaient"]),
            (Subjunctive, ["doive", "doives", "doive", "devions", "deviez", "doivent"]),
        ],
    },
    IrregularVerb {
        lemma: "mettre",
        participle: Some("mis"),
        future_stem: None,
        rows: &[
            (Present, ["mets", "mets", "met", "mettons", "mettez", "mettent"]),
            (Preterite, ["mis", "mis", "mit", "mîmes", "mîtes", "mirent"]),
        ],
    },
    IrregularVerb {
        lemma: "partir",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["pars", "pars", "part", "partons", "partez", "partent"]),
            (Imperfect, ["partais", "partais", "partait", "partions", "partiez", "partaient"]),
            (Subjunctive, ["parte", "partes", "parte", "partions", "partiez", "partent"]),
        ],
    },
    IrregularVerb {
        lemma: "sortir",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["sors", "sors", "sort", "sortons", "sortez", "sortent"]),
            (Imperfect, ["sortais", "sortais", "sortait", "sortions", "sortiez", "sortaient"]),
            (Subjunctive, ["sorte", "sortes", "sorte", "sortions", "sortiez", "sortent"]),
        ],
    },
    IrregularVerb {
        lemma: "dormir",
        participle: None,
        future_stem: None,
        rows: &[
            (Present, ["dors", "dors", "dort", "dormons", "dormez", "dorment"]),
            (Imperfect, ["dormais", "dormais", "dormait", "dormions", "dormiez", "dormaient"]),
            (Subjunctive, ["dorme", "dormes", "dorme", "dormions", "dormiez", "dorment"]),
        ],
    },
];

const FREQUENCIES: &[(&str, f64)] = &[
    ("de", 7.52),
    ("je", 7.30),
    ("est", 7.20),
    ("pas", 7.18),
    ("le", 7.15),
    ("vous", 7.10),
    ("la", 7.08),
    ("tu", 7.05),
    ("que", 7.04),
    ("un", 7.00),
    ("il", 6.98),
    ("et", 6.95),
    ("à", 6.94),
    ("les", 6.80),
    ("en", 6.78),
    ("ne", 6.75),
    ("ce", 6.72),
    ("une", 6.70),
    ("on", 6.62),
    ("ça", 6.60),
    ("pour", 6.55),
    ("qui", 6.52),
    ("me", 6.50),
    ("des", 6.50),
    ("mais", 6.45),
    ("moi", 6.40),
    ("nous", 6.38),
    ("dans", 6.36),
    ("elle", 6.35),
    ("du", 6.30),
    ("te", 6.28),
    ("au", 6.25),
    ("mon", 6.22),
    ("tout", 6.20),
    ("si", 6.15),
    ("avec", 6.10),
    ("plus", 6.08),
    ("bien", 6.05),
    ("toi", 6.00),
    ("ai", 6.45),
    ("être", 5.90),
    ("avoir", 5.80),
    ("faire", 5.85),
    ("aller", 5.70),
    ("pouvoir", 5.40),
    ("vouloir", 5.35),
    ("savoir", 5.50),
    ("venir", 5.30),
    ("dire", 5.60),
    ("prendre", 5.30),
    ("voir", 5.60),
    ("devoir", 5.10),
    ("mettre", 5.00),
    ("partir", 5.10),
    ("sortir", 4.90),
    ("dormir", 4.60),
    ("parler", 5.20),
    ("aimer", 5.10),
    ("marcher", 4.60),
    ("chanter", 4.40),
    ("danser", 4.30),
    ("regarder", 4.80),
    ("pleurer", 4.30),
    ("penser", 5.10),
    ("trouver", 5.00),
    ("donner", 5.00),
    ("oublier", 4.50),
    ("rêver", 4.00),
    ("attendre", 5.00),
    ("perdre", 4.80),
    ("finir", 4.70),
    ("amour", 5.30),
    ("cœur", 5.00),
    ("vie", 5.60),
    ("nuit", 5.20),
    ("jour", 5.45),
    ("temps", 5.50),
    ("monde", 5.50),
    ("mer", 4.70),
    ("ciel", 4.70),
    ("soleil", 4.60),
    ("lune", 4.30),
    ("âme", 4.40),
    ("bouche", 4.40),
    ("yeux", 5.00),
    ("main", 5.00),
    ("peau", 4.50),
    ("feu", 4.90),
    ("rêve", 4.50),
    ("chanson", 4.40),
    ("maison", 5.30),
    ("homme", 5.40),
    ("femme", 5.30),
    ("gens", 5.40),
    ("fois", 5.60),
    ("coup", 5.30),
    ("rue", 4.90),
    ("chemin", 4.70),
    ("beau", 5.00),
    ("bon", 5.50),
    ("grand", 5.30),
    ("petit", 5.40),
    ("triste", 4.40),
    ("seul", 5.00),
    ("toujours", 5.60),
    ("jamais", 5.60),
    ("encore", 5.50),
    ("maintenant", 5.60),
    ("cafard", 3.20),
    ("foudre", 3.60),
    ("marre", 4.30),
];

const IDIOMS: &[Idiom] = &[
    Idiom::new("avoir-le-cafard", "avoir le cafard", "to feel down"),
    Idiom::new("coup-de-foudre", "coup de foudre", "love at first sight"),
    Idiom::new("tout-a-coup", "tout à coup", "suddenly"),
    Idiom::new("en-fait", "en fait", "actually"),
    Idiom::new("il-y-a", "il y a", "there is"),
    Idiom::new("en-avoir-marre", "en avoir marre", "to be fed up"),
    Idiom::new("avoir-besoin-de", "avoir besoin de", "to need"),
    Idiom::new("tout-le-monde", "tout le monde", "everybody"),
    Idiom::new("tout-de-suite", "tout de suite", "right away"),
    Idiom::new("de-temps-en-temps", "de temps en temps", "from time to time"),
    Idiom::new("peu-a-peu", "peu à peu", "little by little"),
    Idiom::new("a-jamais", "à jamais", "forever"),
    Idiom::new("pour-toujours", "pour toujours", "forever"),
    Idiom::new("faire-semblant", "faire semblant", "to pretend"),
    Idiom::new("valoir-la-peine", "valoir la peine", "to be worth it"),
    Idiom::new("avoir-le-coeur-gros", "avoir le cœur gros", "to be heavy-hearted"),
    Idiom::new("poser-un-lapin", "poser un lapin", "to stand someone up"),
    Idiom::new("en-vain", "en vain", "in vain"),
];
