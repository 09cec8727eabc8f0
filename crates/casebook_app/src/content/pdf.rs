//! PDF write-up followed by a "Slides" appendix of boxed frames.

use casebook_docs::{
    Padding, ParagraphStyle, PdfFlow, Result, StyleProfile, TableRenderer, TableSpec, Text,
};

use super::{SCORE_HEADERS, SCORE_ROWS, SUBTITLE, TITLE};

const INCH: f32 = 72.0;

fn inches<const N: usize>(widths: [f32; N]) -> Vec<f32> {
    widths.iter().map(|w| w * INCH).collect()
}

pub fn build(style: &StyleProfile) -> Result<PdfFlow> {
    let mut flow = PdfFlow::new(TITLE);
    write_up(&mut flow, style)?;

    flow.add_paragraph(Text::plain("Slides"), &ParagraphStyle::title());
    flow.add_spacer(8.0);
    slides(&mut flow, style)?;

    Ok(flow)
}

fn write_up(flow: &mut PdfFlow, style: &StyleProfile) -> Result<()> {
    let tables = TableRenderer::new(*style);
    let body = ParagraphStyle::body();
    let bullet = ParagraphStyle::bullet();
    let h1 = ParagraphStyle::h1();
    let h2 = ParagraphStyle::h2();

    flow.add_paragraph(Text::plain(TITLE), &ParagraphStyle::title());
    flow.add_paragraph(Text::plain(SUBTITLE), &ParagraphStyle::subtitle());

    // Q1
    flow.add_paragraph(
        "Q1: How Attractive Is the Smoothie Industry & How Is True Fruits Positioned?",
        &h1,
    );
    flow.add_paragraph("Porter's Five Forces", &h2);
    flow.add_paragraph(
        "I would say the smoothie industry is moderately attractive. The market is worth about \
         $17.8 billion globally and growing around 10% a year, so there is definitely money to be made. \
         But when you actually look at each of Porter's forces, it gets more complicated.",
        &body,
    );
    for force in [
        "**New Entrants (Moderate):** Making smoothies is not that hard, but getting into stores and \
         setting up refrigerated shipping is expensive. That keeps a lot of smaller players out.",
        "**Supplier Power (Moderate-High):** Fresh fruit prices go up and down a lot depending on \
         weather and seasons. True Fruits can not just swap in cheap fillers because they promise no additives.",
        "**Buyer Power (High):** Big grocery stores basically decide what goes on shelves. Consumers \
         can also just grab a different brand without thinking twice.",
        "**Substitutes (High):** There are tons of alternatives. Juice, kombucha, protein shakes, \
         energy drinks, or just eating fruit.",
        "**Rivalry (High):** Innocent has Coca-Cola behind them. PepsiCo has Naked. Danone and \
         Nestle are in the space too.",
    ] {
        flow.add_bullet(force, &bullet);
    }

    flow.add_spacer(6.0);
    flow.add_paragraph("SWOT", &h2);
    // Two stacked tables so each quadrant pair gets its own shaded header.
    let swot = TableRenderer::new(style.with_padding(Padding::new(5.0, 6.0, 5.0, 6.0)));
    let swot_widths = inches([3.1, 3.1]);
    swot.render(
        &TableSpec::new(
            ["Strengths", "Weaknesses"],
            [[
                "- 70%+ market share in Germany\n- Premium glass bottles, all natural\n\
                 - Strong brand identity\n- Eckes-Granini owns 67%\n- 70M euros in revenue (2023)",
                "- Only 35 employees\n- Outsources all manufacturing\n- Controversial marketing history\n\
                 - Not much international experience\n- Glass is expensive to ship",
            ]],
        )
        .with_column_widths(swot_widths.clone()),
        flow,
    )?;
    swot.render(
        &TableSpec::new(
            ["Opportunities", "Threats"],
            [[
                "- EU smoothie market growing 4.4%/yr\n- Health trend keeps getting bigger\n\
                 - Lots of countries they haven't entered\n- E-commerce as a new channel",
                "- Innocent backed by Coca-Cola\n- Fruit prices are unpredictable\n\
                 - Their edgy ads could backfire abroad\n- Inflation hurting premium products",
            ]],
        )
        .with_column_widths(swot_widths),
        flow,
    )?;
    flow.add_spacer(8.0);

    // Q2
    flow.add_paragraph("Q2: How Did Bilzerian Get From 192 to 32 Countries?", &h1);
    flow.add_paragraph(
        "He basically used a funnel. Started with every country in the world and kept cutting based \
         on whether it actually made sense for True Fruits to go there.",
        &body,
    );
    for round in [
        "**Round 1 (192 to around 80):** Cut countries where people can not afford a $2.50 glass \
         bottle smoothie. Set a minimum GDP per capita. Also removed really small countries and unstable ones.",
        "**Round 2 (80 to around 50):** Cut countries without cold-chain logistics, since smoothies go \
         bad without refrigeration. Also removed places without real supermarkets or with really high tariffs.",
        "**Round 3 (50 to 32):** Narrowed it down based on how close they are to Germany, whether people \
         there are into health food, and if Eckes-Granini already has connections in that market.",
    ] {
        flow.add_bullet(round, &bullet);
    }
    flow.add_spacer(4.0);
    flow.add_paragraph(
        "I think GDP per capita and cold-chain infrastructure were probably the two biggest deal breakers. \
         You just can not sell an expensive smoothie where people can not pay for it, and you can not ship \
         it somewhere it will spoil. Some other variables I think would have been useful: how much fruit \
         people in that country already consume, how big social media is there (since True Fruits relies \
         on viral marketing), and whether the country has glass recycling infrastructure since their \
         bottles are a big part of the brand.",
        &body,
    );

    // Q3
    flow.add_paragraph("Q3: Top Three Countries", &h1);
    flow.add_paragraph(
        "I made a scoring model with 10 criteria to try to rank the countries objectively. Each country \
         gets a 1 to 5 on each factor, multiplied by the weight, then I added them up. I left out \
         Germany, Austria, Switzerland, Luxembourg, France, and Spain since True Fruits is already there.",
        &body,
    );
    flow.add_spacer(4.0);
    // Weights go on their own line to fit the narrow columns.
    let score_headers = SCORE_HEADERS.map(|h| h.replacen(' ', "\n", 1));
    let mut score_widths = vec![0.95 * INCH];
    score_widths.extend([0.47 * INCH; 10]);
    score_widths.push(0.52 * INCH);
    tables.render(
        &TableSpec::new(score_headers, SCORE_ROWS).with_column_widths(score_widths),
        flow,
    )?;
    flow.add_spacer(6.0);
    flow.add_paragraph(
        "**Formula:** Score = (GDP x .15) + (Pop x .10) + (Mkt x .15) + (Prox x .10) + \
         (Cold x .10) + (Retail x .10) + (Health x .10) + (Comp x .05) + (Ease x .10) + (Culture x .05)",
        &body,
    );
    flow.add_spacer(4.0);
    for pick in [
        "**1. Netherlands (4.50)** - Right next to Germany so shipping is cheap. GDP per capita \
         is $73K. Has great grocery chains like Albert Heijn. Eckes-Granini already has distribution \
         there which is a huge advantage. EU member so no tariffs.",
        "**2. United Kingdom (4.30)** - Biggest smoothie market in Europe at 18.6% of the \
         continent. 67 million people. Innocent is the main competitor but True Fruits has a \
         totally different vibe. Downside is Brexit makes trade more complicated.",
        "**3. Denmark (4.20)** - GDP per capita of $76K which is one of the highest in Europe. \
         Danes really care about organic and natural food which fits True Fruits well. Also a good \
         stepping stone into the rest of Scandinavia. EU member so zero trade barriers.",
    ] {
        flow.add_paragraph(pick, &body);
    }

    // Q4
    flow.add_paragraph("Q4: Is Exporting the Best Mode of Entry?", &h1);
    flow.add_paragraph(
        "Exporting makes sense for right now since True Fruits is so small. But it is not the only \
         option. Here are the main modes of entry and how they fit:",
        &body,
    );
    let modes = TableSpec::new(
        ["Mode", "What It Is", "Pros", "Cons", "True Fruits Fit"],
        [
            ["Exporting", "Make in Germany,\nship abroad", "Low cost and risk,\neasy to pull out",
             "Glass is heavy/costly\nto ship, spoilage risk", "Good for now"],
            ["Licensing", "Local company\nmakes your product", "Almost zero\ninvestment needed",
             "Lose quality control\nwhich is their whole brand", "Bad fit"],
            ["Franchising", "Partner runs your\nbusiness system", "Fast growth,\nlocal knowledge",
             "This is for restaurants\nnot bottled products", "Does not\napply"],
            ["Joint Venture", "Partner with a\nlocal company", "Shared risk and\nlocal expertise",
             "Share profits,\npossible conflicts", "Could work for\nfarther markets"],
            ["FDI", "Build or buy\noperations abroad", "Total control\nover everything",
             "Way too expensive\nfor 35 people", "Too early"],
        ],
    )
    .with_column_widths(inches([0.8, 1.05, 1.1, 1.2, 1.15]));
    tables.render(&modes, flow)?;
    flow.add_spacer(6.0);
    flow.add_paragraph(
        "The criteria you use to pick a country definitely change depending on your mode of entry. \
         If you are exporting, proximity and cold-chain logistics matter a ton. But if you do a joint \
         venture and produce locally, those barely matter anymore. Instead you need to care about \
         finding the right partner and protecting your brand. My recommendation would be to start \
         exporting to the Netherlands and Denmark since they are close, then think about a joint \
         venture for the UK once there is proof the product sells.",
        &body,
    );

    // Q5
    flow.add_paragraph("Q5: Challenges They Will Face", &h1);
    flow.add_paragraph("**Internal:**", &body);
    for item in [
        "35 employees is barely enough to run Germany, let alone three new countries",
        "Their contract manufacturer needs to be able to handle way more volume",
        "Their edgy marketing works in Germany but could offend people in other countries",
        "Shipping glass bottles internationally is expensive and they break",
        "All the upfront costs (listing fees, marketing, logistics) come before any revenue",
    ] {
        flow.add_bullet(item, &bullet);
    }
    flow.add_spacer(4.0);
    flow.add_paragraph("**External:**", &body);
    for item in [
        "Getting shelf space at foreign grocery stores is super competitive",
        "Innocent has Coca-Cola money and will fight to keep their market share",
        "Brexit means extra customs paperwork and possible tariffs for the UK",
        "People in different countries like different flavors and portion sizes",
        "Currency changes between euros, pounds, and kroner can cut into profits",
    ] {
        flow.add_bullet(item, &bullet);
    }
    flow.add_spacer(16.0);

    flow.add_paragraph("Sources", &h1);
    let sources = [
        "True Fruits. Wikipedia. en.wikipedia.org/wiki/True_Fruits",
        "True Fruits Case, Rotterdam School of Management (813-044-1).",
        "Duhig, A. \"True Fruits Potential Viability in the Paraguay Market.\" Medium.",
        "Fortune Business Insights. \"Smoothie Market Size and Analysis, 2026-2034.\"",
        "Market Data Forecast. \"Europe Smoothies Market Report, 2034.\"",
        "IMARC Group. \"Europe Smoothies Market, 2025-2033.\"",
        "Worldometer. \"GDP per Capita, 2025.\"",
        "Eurostat. \"Population and Population Change Statistics, 2025.\"",
        "Mainsights.io. \"Eckes-Granini Acquires Majority Stake in True Fruits.\"",
        "World Bank. \"B-READY 2025 Business Environment Assessment.\"",
        "MBA Knowledge Base. \"Modes of Entry into International Business.\"",
    ];
    for (i, source) in sources.iter().enumerate() {
        flow.add_paragraph(Text::plain(format!("{}. {source}", i + 1)), &body);
    }

    flow.add_page_break();
    Ok(())
}

fn slides(flow: &mut PdfFlow, style: &StyleProfile) -> Result<()> {
    let body = ParagraphStyle::slide_body();
    let bullet = ParagraphStyle::slide_bullet();
    let compact = TableRenderer::new(style.with_padding(Padding::new(3.0, 6.0, 3.0, 4.0)));
    let roomy = TableRenderer::new(*style);

    flow.add_frame(TITLE, |f| {
        f.add_spacer(50.0);
        f.add_paragraph("Where Should They Expand Next?", &ParagraphStyle::cover_tagline());
        f.add_paragraph(SUBTITLE, &ParagraphStyle::cover_note());
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("Porter's Five Forces", |f| {
        f.add_paragraph("Global smoothie market: $17.8B, growing about 10%/year", &body);
        f.add_spacer(4.0);
        let porter = TableSpec::new(
            ["Force", "Rating", "Why"],
            [
                ["New Entrants", "Moderate", "Cold-chain and shelf space are barriers"],
                ["Supplier Power", "Mod-High", "Fruit prices jump around"],
                ["Buyer Power", "High", "Retailers control shelf space"],
                ["Substitutes", "High", "Juice, kombucha, protein shakes, etc."],
                ["Rivalry", "High", "Innocent/Coca-Cola, PepsiCo, Danone"],
            ],
        )
        .with_column_widths(inches([1.1, 0.85, 3.0]));
        compact.render(&porter, f)?;
        f.add_spacer(4.0);
        f.add_paragraph("Overall: moderately attractive industry", &body);
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("SWOT Analysis", |f| {
        let widths = inches([2.8, 2.8]);
        roomy.render(
            &TableSpec::new(
                ["Strengths", "Weaknesses"],
                [[
                    "- 70%+ German market share\n- All-natural, glass bottles\n- Bold brand\n\
                     - Eckes-Granini backing",
                    "- 35 employees\n- Outsourced production\n- Controversial marketing\n\
                     - Limited intl experience",
                ]],
            )
            .with_column_widths(widths.clone()),
            f,
        )?;
        roomy.render(
            &TableSpec::new(
                ["Opportunities", "Threats"],
                [[
                    "- EU market growing 4.4%/yr\n- Health trend keeps building\n\
                     - Untapped markets nearby",
                    "- Innocent has Coca-Cola\n- Fruit price swings\n- Ads could backfire abroad",
                ]],
            )
            .with_column_widths(widths),
            f,
        )?;
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("Market Screening: 192 to 32", |f| {
        f.add_bullet(
            "**Round 1 (192 to ~80):** GDP per capita, population, political stability",
            &bullet,
        );
        f.add_bullet(
            "**Round 2 (~80 to ~50):** Cold-chain logistics, modern retail, tariffs",
            &bullet,
        );
        f.add_bullet(
            "**Round 3 (~50 to 32):** Proximity, health trends, Eckes-Granini network",
            &bullet,
        );
        f.add_spacer(8.0);
        f.add_paragraph("**Most important filters:**", &body);
        f.add_bullet("GDP per capita - premium product needs people who can pay", &bullet);
        f.add_bullet("Cold-chain infrastructure - smoothies spoil without refrigeration", &bullet);
        f.add_bullet("Proximity to Germany - keeps shipping costs and spoilage down", &bullet);
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("Top Country Rankings", |f| {
        f.add_paragraph("Weighted scoring model with 10 criteria, each scored 1-5", &body);
        f.add_spacer(4.0);
        let rankings = TableSpec::new(
            ["Rank", "Country", "Score", "Why"],
            [
                ["1", "Netherlands", "4.50", "Next to Germany, high GDP, Eckes-Granini network"],
                ["2", "UK", "4.30", "Biggest smoothie market in Europe"],
                ["3", "Denmark", "4.20", "Rich consumers, health-obsessed, EU member"],
                ["4", "Sweden", "4.05", "Health-conscious, great infrastructure"],
                ["5", "Belgium", "3.95", "Right next door, EU single market"],
            ],
        )
        .with_column_widths(inches([0.5, 1.1, 0.6, 3.0]));
        compact.render(&rankings, f)?;
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("Why These Three Countries?", |f| {
        for (country, points) in [
            (
                "**Netherlands**",
                [
                    "GDP/cap: $73K | 17.8M people | Borders Germany",
                    "Eckes-Granini already distributes there | No tariffs",
                ],
            ),
            (
                "**United Kingdom**",
                [
                    "Biggest smoothie market in Europe | 67M people",
                    "Innocent is the main competitor | Brexit adds trade friction",
                ],
            ),
            (
                "**Denmark**",
                [
                    "GDP/cap: $76K | Strong organic food culture",
                    "Gateway to rest of Scandinavia | EU member",
                ],
            ),
        ] {
            if country != "**Netherlands**" {
                f.add_spacer(3.0);
            }
            f.add_paragraph(country, &body);
            for point in points {
                f.add_bullet(point, &bullet);
            }
        }
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("Modes of Entry", |f| {
        let modes = TableSpec::new(
            ["Mode", "Risk", "Cost", "Control", "Fit for True Fruits"],
            [
                ["Exporting", "Low", "Low", "Low", "Good for now"],
                ["Licensing", "Low", "Low", "Low", "Bad - quality risk"],
                ["Franchising", "Med", "Low", "Med", "Does not apply"],
                ["Joint Venture", "Med", "Med", "Shared", "Good for far markets"],
                ["FDI", "High", "High", "Full", "Too early"],
            ],
        )
        .with_column_widths(inches([1.0, 0.55, 0.55, 0.65, 1.5]));
        compact.render(&modes, f)?;
        f.add_spacer(6.0);
        f.add_bullet("Start with exporting to Netherlands and Denmark", &bullet);
        f.add_bullet("Consider a joint venture for the UK once demand is proven", &bullet);
        Ok(())
    })?;
    flow.add_spacer(12.0);

    flow.add_frame("Challenges and Recommendations", |f| {
        f.add_paragraph("**Internal**", &body);
        for item in [
            "Need to hire - 35 people is not enough",
            "Manufacturer has to scale up production",
            "Marketing needs to be toned down for new cultures",
            "Glass bottles are heavy and fragile to ship",
        ] {
            f.add_bullet(item, &bullet);
        }
        f.add_spacer(4.0);
        f.add_paragraph("**External**", &body);
        for item in [
            "Getting shelf space is really competitive",
            "Innocent/Coca-Cola will push back hard",
            "Brexit complicates UK trade",
            "Different countries have different taste preferences",
        ] {
            f.add_bullet(item, &bullet);
        }
        f.add_spacer(4.0);
        f.add_paragraph("**Plan:** Go Netherlands first, then UK, then Denmark", &body);
        Ok(())
    })?;
    flow.add_spacer(12.0);

    Ok(())
}
