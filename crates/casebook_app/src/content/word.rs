//! Word-processing write-up.

use casebook_docs::{Result, StyleProfile, TableRenderer, TableSpec, Text, WordDocument};

use super::{SCORE_HEADERS, SCORE_ROWS, SUBTITLE, TITLE};

const MODES_HEADERS: [&str; 5] = ["Mode", "What It Is", "Pros", "Cons", "Fit"];

#[rustfmt::skip]
const MODES_ROWS: [[&str; 5]; 5] = [
    ["Exporting", "Make in Germany, ship it", "Low cost, low risk", "Glass is heavy, spoilage", "Good for now"],
    ["Licensing", "Local co. makes your stuff", "Zero investment", "Lose quality control", "Bad fit"],
    ["Franchising", "Partner runs your system", "Fast, local knowledge", "For restaurants not CPG", "Does not apply"],
    ["Joint Venture", "Partner with local co.", "Shared risk, local help", "Share profits, conflicts", "Good for far mkts"],
    ["FDI", "Build/buy abroad", "Total control", "Way too expensive", "Too early"],
];

const SOURCES: [&str; 12] = [
    "True Fruits. Wikipedia. en.wikipedia.org/wiki/True_Fruits",
    "Hulsink, W., Carvalho, L., Kunz, M., & Laker, A. \"True Fruits.\" Rotterdam School of \
     Management Case 813-044-1. The Case Centre / Harvard Course Pack.",
    "Duhig, A. \"True Fruits Potential Viability in the Paraguay Market.\" Medium.",
    "Fortune Business Insights. \"Smoothie Market Size and Analysis, 2026-2034.\"",
    "Market Data Forecast. \"Europe Smoothies Market Report, 2034.\"",
    "IMARC Group. \"Europe Smoothies Market, 2025-2033.\"",
    "Worldometer. \"GDP per Capita, 2025.\" worldometers.info/gdp/gdp-per-capita/",
    "Eurostat. \"Population and Population Change Statistics, 2025.\"",
    "Mainsights.io. \"Eckes-Granini Acquires Majority Stake in True Fruits.\"",
    "World Bank. \"B-READY 2025 Business Environment Assessment.\"",
    "MBA Knowledge Base. \"Modes of Entry into International Business.\" mbaknol.com",
    "True Fruits Supplemental Spreadsheet. Harvard Course Pack.",
];

pub fn build(style: &StyleProfile) -> Result<WordDocument> {
    let tables = TableRenderer::new(*style);
    let mut doc = WordDocument::default();

    doc.add_title(TITLE);
    doc.add_subtitle(SUBTITLE);

    // Q1
    doc.add_heading(
        "Q1: How Attractive Is the Smoothie Industry & How Is True Fruits Positioned?",
        2,
    );
    doc.add_heading("Porter's Five Forces", 3);
    doc.add_paragraph(Text::plain(
        "I would say the smoothie industry is moderately attractive overall. The market is worth \
         about $17.8 billion globally and growing around 10% a year so there is definitely growth \
         there. But when you look at each of the forces individually things get more complicated.",
    ));
    for force in [
        "Threat of New Entrants (Moderate) - Making smoothies is not that hard but getting into \
         stores and building refrigerated distribution costs a lot. That keeps most new competitors out.",
        "Supplier Power (Moderate-High) - Fruit prices change a lot with weather and seasons. \
         True Fruits can not just use cheaper substitutes since their brand is built on no additives.",
        "Buyer Power (High) - Grocery stores decide what gets on the shelves and consumers can \
         easily grab a different brand. Both of those give buyers a lot of power.",
        "Substitutes (High) - People can drink juice, kombucha, protein shakes, or just eat fruit \
         instead. There are a lot of alternatives out there.",
        "Rivalry (High) - Innocent has Coca-Cola behind them. PepsiCo has Naked. Danone and \
         Nestle are in the mix too. Big companies with big budgets.",
    ] {
        doc.add_bullet(Text::plain(force));
    }

    doc.add_heading("SWOT", 3);
    let swot = TableSpec::new(
        ["", "Positive", "Negative"],
        [
            [
                "Internal",
                "Strengths:\n- 70%+ market share in Germany\n- Premium glass bottles, all natural\n\
                 - Bold brand identity\n- Eckes-Granini owns 67%\n- 70M euros revenue (2023)",
                "Weaknesses:\n- Only 35 employees\n- Outsources all manufacturing\n\
                 - Controversial marketing\n- Barely any intl experience\n- Glass = expensive to ship",
            ],
            [
                "External",
                "Opportunities:\n- EU smoothie mkt growing 4.4%/yr\n- Health trend keeps building\n\
                 - Lots of untapped countries\n- E-commerce as new channel",
                "Threats:\n- Innocent backed by Coca-Cola\n- Fruit prices unpredictable\n\
                 - Edgy ads could backfire\n- Inflation hurts premium pricing",
            ],
        ],
    );
    tables.render(&swot, &mut doc)?;
    doc.add_blank();

    // Q2
    doc.add_heading("Q2: How Did Bilzerian Get From 192 to 32 Countries?", 2);
    doc.add_paragraph(Text::plain(
        "He used a funnel. Started with every country and kept cutting the ones that did not make \
         sense for True Fruits.",
    ));
    for round in [
        "Round 1 (192 to about 80) - Cut countries where people cannot afford a $2.50 glass \
         bottle smoothie. Set a minimum GDP per capita and population. Removed unstable countries too.",
        "Round 2 (80 to about 50) - Cut countries without cold-chain logistics since smoothies \
         go bad without refrigeration. Also removed places without real supermarkets or with \
         really high tariffs on imports.",
        "Round 3 (50 to 32) - Narrowed based on proximity to Germany, whether people are into \
         health food, and if Eckes-Granini already has contacts there.",
    ] {
        doc.add_bullet(Text::plain(round));
    }
    doc.add_paragraph(Text::plain(
        "GDP per capita and cold-chain infrastructure were probably the two biggest deal breakers. \
         You cannot sell an expensive smoothie where people cannot pay for it and you cannot ship \
         it somewhere it will go bad. Some other variables I think would have helped: per-capita \
         fruit consumption, social media usage (True Fruits relies on viral stuff), and glass \
         recycling infrastructure since their bottles are part of the brand.",
    ));

    // Q3
    doc.add_heading("Q3: Top Three Countries", 2);
    doc.add_paragraph(Text::plain(
        "I made a scoring model to rank countries. 10 criteria, each weighted by importance. \
         Every country scored 1-5 on each thing, multiplied by the weight, added up. Left out \
         countries where True Fruits already sells.",
    ));
    tables.render(&TableSpec::new(SCORE_HEADERS, SCORE_ROWS), &mut doc)?;
    doc.add_blank();
    doc.add_paragraph(Text::plain(
        "Formula: Score = (GDP x .15) + (Pop x .10) + (Mkt x .15) + (Prox x .10) + \
         (Cold x .10) + (Retail x .10) + (Health x .10) + (Comp x .05) + (Ease x .10) + (Culture x .05)",
    ));
    for pick in [
        "1. Netherlands (4.50) - Right next to Germany so shipping is cheap. GDP per capita \
         is $73K. Good grocery chains like Albert Heijn. Eckes-Granini already distributes \
         there. EU member so no tariffs.",
        "2. United Kingdom (4.30) - Biggest smoothie market in Europe at 18.6% of the \
         continent. 67 million people. Innocent is the main competitor but True Fruits has \
         a different vibe. Brexit makes trade harder though.",
        "3. Denmark (4.20) - GDP per capita of $76K, one of the highest in Europe. Danes \
         care a lot about organic and natural food. Good stepping stone into Scandinavia. \
         EU member so no trade barriers.",
    ] {
        doc.add_paragraph(Text::plain(pick));
    }

    // Q4
    doc.add_heading("Q4: Is Exporting the Best Mode of Entry?", 2);
    doc.add_paragraph(Text::plain(
        "Exporting makes sense for now since the company is so small. But there are other \
         options and they each have tradeoffs.",
    ));
    tables.render(&TableSpec::new(MODES_HEADERS, MODES_ROWS), &mut doc)?;
    doc.add_blank();
    doc.add_paragraph(Text::plain(
        "The criteria definitely change by mode. Exporting means proximity and cold-chain \
         matter a ton. Joint ventures mean you care more about partner quality and IP protection. \
         I would say start exporting to the Netherlands and Denmark, then consider a joint \
         venture for the UK once you know the product sells there.",
    ));

    // Q5
    doc.add_heading("Q5: Challenges They Will Face", 2);
    doc.add_paragraph(Text::bold("Internal:"));
    for item in [
        "35 people is not enough to run multiple new countries at once",
        "Their manufacturer needs to handle way more volume",
        "Their edgy marketing could offend people in other countries",
        "Glass bottles are heavy, they break, and they cost a lot to ship",
        "All the upfront costs come before any money comes in",
    ] {
        doc.add_bullet(Text::plain(item));
    }
    doc.add_paragraph(Text::bold("External:"));
    for item in [
        "Getting shelf space at foreign grocery stores is super competitive",
        "Innocent has Coca-Cola money and will fight back",
        "Brexit means extra paperwork and possible tariffs for the UK",
        "Different countries like different flavors and sizes",
        "Currency changes between euros, pounds, and kroner can hurt margins",
    ] {
        doc.add_bullet(Text::plain(item));
    }

    doc.add_blank();
    doc.add_heading("Sources", 2);
    for (i, source) in SOURCES.iter().enumerate() {
        doc.add_paragraph(Text::plain(format!("{}. {source}", i + 1)));
    }

    Ok(doc)
}
