use clap::ValueEnum;

use crate::normalize::language::Language;

/// Which language the report was exported in, and which language to render in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

/// Field labels as they appear in the `th` cells of an exported report.
#[derive(Clone, Copy, Debug)]
pub struct Labels {
    pub item_type: &'static str,
    pub abstract_: &'static str,
    pub date: &'static str,
    pub language: &'static str,
    pub publication_title: &'static str,
}

/// Title and column headers of one report section.
#[derive(Clone, Copy, Debug)]
pub struct Heading {
    pub title: &'static str,
    pub columns: [&'static str; 2],
}

/// Section headings, in rendering order.
#[derive(Clone, Copy, Debug)]
pub struct Headings {
    pub item_types: Heading,
    pub authors: Heading,
    pub keywords: Heading,
    pub dates: Heading,
    pub languages: Heading,
    pub journals: Heading,
    pub tags: Heading,
}

const EN_LABELS: Labels = Labels {
    item_type: "Item Type",
    abstract_: "Abstract",
    date: "Date",
    language: "Language",
    publication_title: "Publication Title",
};

const PT_LABELS: Labels = Labels {
    item_type: "Tipo do item",
    abstract_: "Resumo",
    date: "Data",
    language: "Idioma",
    publication_title: "Título da publicação",
};

const EN_HEADINGS: Headings = Headings {
    item_types: Heading {
        title: "By item type",
        columns: ["Type", "Count"],
    },
    authors: Heading {
        title: "By author",
        columns: ["Author", "Publications"],
    },
    keywords: Heading {
        title: "Keyword occurrences in abstracts",
        columns: ["Term", "Occurrences"],
    },
    dates: Heading {
        title: "By date",
        columns: ["Year", "Publications"],
    },
    languages: Heading {
        title: "By language",
        columns: ["Language", "Publications"],
    },
    journals: Heading {
        title: "By journal",
        columns: ["Journal", "Publications"],
    },
    tags: Heading {
        title: "Tags",
        columns: ["Tag", "Frequency"],
    },
};

const PT_HEADINGS: Headings = Headings {
    item_types: Heading {
        title: "Por tipo de item",
        columns: ["Tipo", "Quantidade"],
    },
    authors: Heading {
        title: "Por autor",
        columns: ["Autor", "Publicações"],
    },
    keywords: Heading {
        title: "Incidência de palavras em resumos",
        columns: ["Termo", "Ocorrências"],
    },
    dates: Heading {
        title: "Por data",
        columns: ["Ano", "Publicações"],
    },
    languages: Heading {
        title: "Por idioma",
        columns: ["Idioma", "Publicações"],
    },
    journals: Heading {
        title: "Por periódico",
        columns: ["Periódico", "Publicações"],
    },
    tags: Heading {
        title: "Palavras-chave",
        columns: ["Tag", "Frequência"],
    },
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN_LABELS,
            Locale::Pt => &PT_LABELS,
        }
    }

    pub fn headings(self) -> &'static Headings {
        match self {
            Locale::En => &EN_HEADINGS,
            Locale::Pt => &PT_HEADINGS,
        }
    }

    /// Row label for items whose year could not be recovered.
    pub fn unknown_year(self) -> &'static str {
        match self {
            Locale::En => "Unknown",
            Locale::Pt => "Desconhecido",
        }
    }

    pub fn language_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Locale::En, Language::Portuguese) => "Portuguese",
            (Locale::En, Language::English) => "English",
            (Locale::En, Language::Spanish) => "Spanish",
            (Locale::En, Language::Unidentified) => "Unidentified",
            (Locale::Pt, Language::Portuguese) => "Português",
            (Locale::Pt, Language::English) => "Inglês",
            (Locale::Pt, Language::Spanish) => "Espanhol",
            (Locale::Pt, Language::Unidentified) => "Não Identificado",
        }
    }
}
