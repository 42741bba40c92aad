//! Hand-authored deck content.
//!
//! Seven sight-seeing decks of eight cards each (the eighth card of a
//! deck is the catch-all "More …" entry, usually without geo data and
//! with reduced text) plus the two four-card vocabulary decks. Decks
//! list cards in badge (`order`) position; global ids are assigned by
//! the catalog builder, never here.

use wonders_model::{Card, CardText, Category, Language};
use Language::{En, Pt};

pub(super) fn deck(category: Category) -> Vec<Card> {
    match category {
        Category::Monuments => monuments(),
        Category::Nature => nature(),
        Category::Gastronomy => gastronomy(),
        Category::Popular => popular(),
        Category::Churches => churches(),
        Category::Museums => museums(),
        Category::Sintra => sintra(),
        Category::VocabularyPt => vocabulary_pt(),
        Category::VocabularyEn => vocabulary_en(),
    }
}

fn monuments() -> Vec<Card> {
    let cat = Category::Monuments;
    vec![
        Card::new(cat, 1, "sao_jorge_castle")
            .with_coordinate(38.713909, -9.133476)
            .with_text(En, CardText {
                description: Some("A medieval castle with panoramic views over Lisbon.".into()),
                history: Some("The castle was built by the Moors in the 10th century and later conquered by King Afonso Henriques in 1147.".into()),
                highlights: Some("Eleven towers, the camera obscura, and resident peacocks in the gardens.".into()),
                address: Some("Rua de Santa Cruz do Castelo, 1100-129 Lisboa, Portugal".into()),
                ..CardText::new(
                    "São Jorge Castle",
                    "Founded in the 10th by the Moors and conquered by the first king of Portugal in 1147.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Um castelo medieval com vistas panorâmicas sobre Lisboa.".into()),
                history: Some("O castelo foi construído pelos mouros no século X e depois conquistado por D. Afonso Henriques em 1147.".into()),
                highlights: Some("Onze torres, a câmara escura e os pavões residentes nos jardins.".into()),
                address: Some("Rua de Santa Cruz do Castelo, 1100-129 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Castelo de São Jorge",
                    "Fundado no século X pelos mouros e conquistado pelo primeiro rei de Portugal em 1147.",
                )
            }),
        Card::new(cat, 2, "torre_belem")
            .with_coordinate(38.691584, -9.215821)
            .with_text(En, CardText {
                description: Some("A UNESCO World Heritage site and symbol of the Age of Discoveries.".into()),
                history: Some("Constructed between 1514 and 1520 as part of the Tagus river defense system.".into()),
                highlights: Some("The Manueline stonework and the rhinoceros gargoyle on the western facade.".into()),
                address: Some("Av. Brasília, 1400-038 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Belém Tower",
                    "Built in the early 16th century, it is a portal to Portugal's maritime past.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Patrimônio Mundial da UNESCO e símbolo da Era dos Descobrimentos.".into()),
                history: Some("Construída entre 1514 e 1520 como parte do sistema de defesa do rio Tejo.".into()),
                highlights: Some("A cantaria manuelina e a gárgula de rinoceronte na fachada poente.".into()),
                address: Some("Av. Brasília, 1400-038 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Torre de Belém",
                    "Construída no início do século XVI, é um portal para o passado marítimo de Portugal.",
                )
            }),
        Card::new(cat, 3, "aqueduto")
            .with_coordinate(38.72660, -9.16623)
            .with_text(En, CardText {
                description: Some("An impressive aqueduct spanning the Alcântara valley.".into()),
                history: Some("Completed in 1748, it survived the 1755 earthquake.".into()),
                address: Some("Calçada da Quintinha 6, 1070-225 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Águas Livres Aqueduct",
                    "A remarkable 18th-century aqueduct that supplied Lisbon with water.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Um impressionante aqueduto que atravessa o vale de Alcântara.".into()),
                history: Some("Concluído em 1748, sobreviveu ao terremoto de 1755.".into()),
                address: Some("Calçada da Quintinha 6, 1070-225 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Aqueduto das Águas Livres",
                    "Um notável aqueduto do século XVIII que abastecia Lisboa com água.",
                )
            }),
        Card::new(cat, 4, "comercio")
            .with_coordinate(38.707750, -9.136592)
            .with_text(En, CardText {
                description: Some("A grand plaza facing the Tagus river.".into()),
                history: Some("Rebuilt after the 1755 earthquake as part of the Pombaline downtown.".into()),
                address: Some("Praça do Comércio, 1100-148 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Comércio Square",
                    "A triumphal arch and symbol of Lisbon's rebirth after the earthquake.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Uma grande praça voltada para o rio Tejo.".into()),
                history: Some("Reconstruída após o terremoto de 1755 como parte do centro pombalino.".into()),
                address: Some("Praça do Comércio, 1100-148 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Praça do Comércio",
                    "Um arco triunfal e símbolo do renascimento de Lisboa após o terremoto.",
                )
            }),
        Card::new(cat, 5, "santa_justa")
            .with_coordinate(38.713909, -9.139506)
            .with_text(En, CardText {
                description: Some("A neo-Gothic iron elevator in downtown Lisbon.".into()),
                history: Some("Opened in 1902, designed by Raoul Mesnier du Ponsard.".into()),
                address: Some("R. do Ouro, 1150-060 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Santa Justa Elevator",
                    "A 19th-century elevator with panoramic city views.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Um elevador de ferro neogótico no centro de Lisboa.".into()),
                history: Some("Inaugurado em 1902, projetado por Raoul Mesnier du Ponsard.".into()),
                address: Some("R. do Ouro, 1150-060 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Elevador de Santa Justa",
                    "Um elevador do século XIX com vistas panorâmicas da cidade.",
                )
            }),
        Card::new(cat, 6, "padrao")
            .with_coordinate(38.693056, -9.205556)
            .with_text(En, CardText {
                description: Some("A monument celebrating Portugal's explorers.".into()),
                history: Some("Inaugurated in 1960 for the 500th anniversary of Henry the Navigator's death.".into()),
                address: Some("Av. Brasília, 1400-038 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Discoveries Monument",
                    "A tribute to the Portuguese Age of Discovery, on the Tagus riverbank.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Um monumento que celebra os exploradores de Portugal.".into()),
                history: Some("Inaugurado em 1960 para o 500º aniversário da morte de Henrique, o Navegador.".into()),
                address: Some("Av. Brasília, 1400-038 Lisboa, Portugal".into()),
                ..CardText::new(
                    "Padrão dos Descobrimentos",
                    "Um tributo à Era dos Descobrimentos Portuguesa, na margem do rio Tejo.",
                )
            }),
        Card::new(cat, 7, "ponte_25_abril")
            .with_coordinate(38.689167, -9.177778)
            .with_text(En, CardText {
                description: Some("Lisbon's iconic bridges over the Tagus river.".into()),
                history: Some("The 25 de Abril Bridge opened in 1966; Vasco da Gama Bridge in 1998.".into()),
                address: Some("Lisbon, Portugal".into()),
                ..CardText::new(
                    "Lisbon Bridges",
                    "Wonderful and historic bridges across the Tagus.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("As pontes icônicas de Lisboa sobre o rio Tejo.".into()),
                history: Some("A Ponte 25 de Abril foi inaugurada em 1966; a Ponte Vasco da Gama em 1998.".into()),
                address: Some("Lisboa, Portugal".into()),
                ..CardText::new(
                    "Pontes de Lisboa",
                    "Pontes de Lisboa maravilhosas e históricas.",
                )
            }),
        Card::new(cat, 8, "plus_monuments")
            .with_text(En, CardText {
                description: Some("Explore more of Lisbon's rich heritage.".into()),
                ..CardText::new("More Monuments", "Lisbon has many more incredible monuments!")
            })
            .with_text(Pt, CardText {
                description: Some("Explore mais do rico patrimônio de Lisboa.".into()),
                ..CardText::new("Mais Monumentos", "Lisboa tem muitos monumentos incríveis!")
            }),
    ]
}

fn nature() -> Vec<Card> {
    let cat = Category::Nature;
    vec![
        Card::new(cat, 1, "rio_tejo")
            .with_coordinate(38.7071, -9.1366)
            .with_text(En, CardText {
                description: Some("The Tagus River crosses Portugal from east to west, vital to Lisbon's history, economy, and landscape.".into()),
                history: Some("Since ancient times, the Tagus has been a route for navigators, a source of inspiration for poets, and the stage for historic battles.".into()),
                address: Some("Lisbon, Portugal".into()),
                ..CardText::new(
                    "Tagus River",
                    "The largest river in the Iberian Peninsula rises in Spain and flows into the Atlantic Ocean in Lisbon.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("O Rio Tejo atravessa Portugal de leste a oeste, sendo vital para a história, economia e paisagem de Lisboa.".into()),
                history: Some("Desde tempos antigos, o Tejo foi rota de navegadores, fonte de inspiração para poetas e palco de batalhas históricas.".into()),
                address: Some("Lisboa, Portugal".into()),
                ..CardText::new(
                    "Rio Tejo",
                    "O maior rio da Península Ibérica nasce na Espanha e desagua no Oceano Atlântico em Lisboa.",
                )
            }),
        // One logical card, several physical miradouros.
        Card::new(cat, 2, "miradouros")
            .with_coordinate(38.7138, -9.1335)
            .with_extra_locations(&[
                (38.7181, -9.1336), // Senhora do Monte
                (38.7132, -9.1393), // Santa Catarina
                (38.7147, -9.1371), // São Pedro de Alcântara
            ])
            .with_text(En, CardText {
                description: Some("Lisbon's viewpoints offer unique panoramas over the city, river, and hills.".into()),
                history: Some("Many viewpoints arose near old bastions and churches, becoming places for gathering and contemplation.".into()),
                address: Some("Various locations in Lisbon".into()),
                ..CardText::new(
                    "Viewpoints",
                    "High points in Lisbon with breathtaking views over the city and river.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Os miradouros de Lisboa oferecem panoramas únicos sobre a cidade, o rio e as colinas.".into()),
                history: Some("Muitos miradouros surgiram junto a antigos baluartes e igrejas, tornando-se pontos de encontro e contemplação.".into()),
                address: Some("Vários pontos em Lisboa".into()),
                ..CardText::new(
                    "Miradouros",
                    "Pontos altos de Lisboa com vistas deslumbrantes sobre a cidade e o rio.",
                )
            }),
        Card::new(cat, 3, "monsanto")
            .with_coordinate(38.7262, -9.1506)
            .with_text(En, CardText {
                description: Some("Scattered throughout Lisbon, gardens and parks are havens of tranquility and biodiversity.".into()),
                history: Some("Some gardens date back to the 18th century, created for royalty and opened to the public over the centuries.".into()),
                address: Some("e.g., Jardim da Estrela, Eduardo VII Park, Lisbon".into()),
                ..CardText::new(
                    "Gardens and Parks",
                    "Green spaces perfect for relaxing, strolling, and enjoying urban nature.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Espalhados por Lisboa, os jardins e parques são refúgios de tranquilidade e biodiversidade.".into()),
                history: Some("Alguns jardins datam do século XVIII, criados para a realeza e abertos ao público ao longo dos séculos.".into()),
                address: Some("Ex: Jardim da Estrela, Parque Eduardo VII, Lisboa".into()),
                ..CardText::new(
                    "Jardins e Parques",
                    "Espaços verdes perfeitos para relaxar, passear e apreciar a natureza urbana.",
                )
            }),
        Card::new(cat, 4, "serra_sintra")
            .with_coordinate(38.7939, -9.3907)
            .with_text(En, CardText {
                description: Some("The Sintra Mountains are a magical place, covered in lush vegetation and historic monuments.".into()),
                history: Some("It was a refuge for kings and poets, inspiring legends and literary works since the Middle Ages.".into()),
                address: Some("Sintra, Portugal".into()),
                ..CardText::new(
                    "Sintra Mountains",
                    "Mystical mountains covered in forest, palaces, and enchanting trails.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("A Serra de Sintra é um local mágico, coberto de vegetação exuberante e monumentos históricos.".into()),
                history: Some("Foi refúgio de reis e poetas, inspirando lendas e obras literárias desde a Idade Média.".into()),
                address: Some("Sintra, Portugal".into()),
                ..CardText::new(
                    "Serra de Sintra",
                    "Montanhas místicas cobertas de floresta, palácios e trilhos encantadores.",
                )
            }),
        Card::new(cat, 5, "praias")
            .with_coordinate(38.6517, -9.2333)
            .with_text(En, CardText {
                description: Some("The beaches near Lisbon are ideal for sunbathing, surfing, and seaside walks.".into()),
                history: Some("Popular since the 19th century, they became accessible destinations with the arrival of trains.".into()),
                address: Some("Costa da Caparica, Carcavelos, Estoril".into()),
                ..CardText::new(
                    "Lisbon Beaches",
                    "Golden sands and refreshing sea just minutes from the city center.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("As praias próximas a Lisboa são ideais para banhos de sol, surf e passeios à beira-mar.".into()),
                history: Some("Frequentadas desde o século XIX, tornaram-se destinos populares com a chegada dos comboios.".into()),
                address: Some("Costa da Caparica, Carcavelos, Estoril".into()),
                ..CardText::new(
                    "Praias de Lisboa",
                    "Areias douradas e mar refrescante a poucos minutos do centro da cidade.",
                )
            }),
        Card::new(cat, 6, "cabo_roca")
            .with_coordinate(38.7804, -9.4989)
            .with_text(En, CardText {
                description: Some("Cape Roca is the westernmost point of mainland Europe, with breathtaking views.".into()),
                history: Some("Once considered the 'end of the world' by ancient Europeans, it is mentioned by Camões in 'The Lusiads'.".into()),
                address: Some("Estrada do Cabo da Roca, Colares, Sintra".into()),
                ..CardText::new(
                    "Cape Roca",
                    "The westernmost point of mainland Europe, with impressive cliffs.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Cabo da Roca é o ponto mais ocidental da Europa continental, com vistas de cortar a respiração.".into()),
                history: Some("Foi considerado o 'fim do mundo' pelos antigos europeus e é citado por Camões em 'Os Lusíadas'.".into()),
                address: Some("Estrada do Cabo da Roca, Colares, Sintra".into()),
                ..CardText::new(
                    "Cabo da Roca",
                    "O ponto mais ocidental da Europa continental, com falésias impressionantes.",
                )
            }),
        Card::new(cat, 7, "onda_nazare")
            .with_coordinate(39.6102, -9.0856)
            .with_text(En, CardText {
                description: Some("Nazaré is famous for its giant waves, attracting surfers from all over the world.".into()),
                history: Some("The giant wave phenomenon is due to the Nazaré Canyon, a unique underwater gorge.".into()),
                address: Some("Praia do Norte, Nazaré".into()),
                ..CardText::new(
                    "Nazaré Waves",
                    "Famous for the biggest surfed waves in the world, attracting international surfers.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("A Nazaré é famosa pelas suas ondas gigantes, atraindo surfistas de todo o mundo.".into()),
                history: Some("O fenómeno das ondas gigantes deve-se ao Canhão da Nazaré, um desfiladeiro submarino único.".into()),
                address: Some("Praia do Norte, Nazaré".into()),
                ..CardText::new(
                    "Ondas da Nazaré",
                    "Famosa pelas maiores ondas surfadas do mundo, atraindo surfistas internacionais.",
                )
            }),
        Card::new(cat, 8, "plus_nature")
            .with_text(En, CardText {
                description: Some("Explore natural reserves, trails, and protected landscapes throughout the country.".into()),
                history: Some("Portugal invests in environmental preservation, creating parks and protected areas since the 20th century.".into()),
                address: Some("Various locations in Portugal".into()),
                ..CardText::new(
                    "More Nature",
                    "Discover even more natural wonders in Portugal and around Lisbon.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Explore reservas naturais, trilhos e paisagens protegidas em todo o país.".into()),
                history: Some("Portugal investe na preservação ambiental, criando parques e áreas de proteção desde o século XX.".into()),
                address: Some("Diversos locais em Portugal".into()),
                ..CardText::new(
                    "Mais Natureza",
                    "Descubra ainda mais belezas naturais em Portugal e arredores de Lisboa.",
                )
            }),
    ]
}

fn gastronomy() -> Vec<Card> {
    let cat = Category::Gastronomy;
    vec![
        Card::new(cat, 1, "pasteis")
            .with_coordinate(38.6972, -9.2036) // Pastéis de Belém
            .with_text(En, CardText {
                description: Some("Pastéis de nata are small custard tarts, served warm and sprinkled with cinnamon.".into()),
                history: Some("Created by monks in Belém in the 19th century, they became a symbol of Portuguese sweets.".into()),
                address: Some("Pastéis de Belém, Rua de Belém 84-92, Lisbon".into()),
                ..CardText::new(
                    "Pastéis de Nata",
                    "Portugal's most famous pastry, with creamy custard and crispy puff pastry.",
                )
            })
            .with_text(Pt, CardText {
                description: Some(
                    "Os pastéis de nata são pequenas tartes de creme, servidas quentes e polvilhadas com canela.\n\n\
                     A receita original de Belém permanece secreta até hoje, guardada pela fábrica junto ao mosteiro, \
                     e a fila à porta faz parte do ritual.".into(),
                ),
                history: Some("Criados por monges em Belém no século XIX, tornaram-se símbolo da doçaria portuguesa.".into()),
                address: Some("Pastéis de Belém, Rua de Belém 84-92, Lisboa".into()),
                ..CardText::new(
                    "Pastéis de Nata",
                    "O doce mais famoso de Portugal, com creme e massa folhada crocante.",
                )
            }),
        Card::new(cat, 2, "bacalhau")
            .with_coordinate(38.7369, -9.1525) // Laurentina
            .with_text(En, CardText {
                description: Some("Bacalhau is served baked, boiled, fried, or in salads, always present at celebrations.".into()),
                history: Some("Introduced in the 16th century, it became essential due to its preservation in salt.".into()),
                address: Some("Laurentina Restaurant, Av. Conde Valbom 71A, Lisbon".into()),
                ..CardText::new(
                    "Codfish",
                    "The most versatile fish in Portuguese cuisine, prepared in countless ways.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Bacalhau é servido assado, cozido, frito ou em saladas, sempre presente em festas.".into()),
                history: Some("Introduzido no século XVI, tornou-se essencial devido à sua conservação em sal.".into()),
                address: Some("Restaurante Laurentina, Av. Conde Valbom 71A, Lisboa".into()),
                ..CardText::new(
                    "Bacalhau",
                    "O peixe mais versátil da culinária portuguesa, preparado de mil maneiras.",
                )
            }),
        Card::new(cat, 3, "ginja")
            .with_coordinate(38.7146, -9.1396) // A Ginjinha
            .with_text(En, CardText {
                description: Some("Ginjinha is a sweet cherry liqueur, enjoyed as an aperitif or digestif.".into()),
                history: Some("Popularized in the 19th century, it became a tradition in Lisbon's downtown bars.".into()),
                address: Some("A Ginjinha, Largo de São Domingos 8, Lisbon".into()),
                ..CardText::new(
                    "Ginjinha",
                    "Lisbon's traditional cherry liqueur, served in a small glass.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("A ginjinha é um licor doce de cereja, apreciado como aperitivo ou digestivo.".into()),
                history: Some("Popularizada no século XIX, tornou-se tradição nos bares do centro de Lisboa.".into()),
                address: Some("A Ginjinha, Largo de São Domingos 8, Lisboa".into()),
                ..CardText::new(
                    "Ginjinha",
                    "Licor tradicional de Lisboa feito de ginjas, servido em copo pequeno.",
                )
            }),
        Card::new(cat, 4, "peixe")
            .with_coordinate(38.7223, -9.1355) // Ramiro
            .with_text(En, CardText {
                description: Some("Sardines, sea bass, and gilt-head bream are grilled or baked, celebrating the taste of the sea.".into()),
                history: Some("Fishing has always been vital to the economy and culture of coastal communities.".into()),
                address: Some("Ramiro Seafood, Av. Almirante Reis 1, Lisbon".into()),
                ..CardText::new(
                    "Fish",
                    "Fresh Atlantic fish are the base of typical Portuguese dishes.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Sardinha, robalo e dourada são grelhados ou assados, celebrando o sabor do mar.".into()),
                history: Some("A pesca sempre foi vital para a economia e cultura das comunidades costeiras.".into()),
                address: Some("Cervejaria Ramiro, Av. Almirante Reis 1, Lisboa".into()),
                ..CardText::new(
                    "Peixe",
                    "Peixes frescos do Atlântico são base de pratos típicos portugueses.",
                )
            }),
        Card::new(cat, 5, "carne")
            .with_coordinate(38.7157, -9.1402) // Solar dos Presuntos
            .with_text(En, CardText {
                description: Some("Cozido à portuguesa combines meats, sausages, and vegetables in a comforting dish.".into()),
                history: Some("Meat recipes reflect rural influences and traditional festivities.".into()),
                address: Some("Solar dos Presuntos, Rua das Portas de Santo Antão 150, Lisbon".into()),
                ..CardText::new(
                    "Meat",
                    "Meat dishes like cozido and roast suckling pig are icons of national cuisine.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("Cozido à portuguesa reúne carnes, enchidos e legumes num prato reconfortante.".into()),
                history: Some("Receitas de carne refletem influências rurais e festividades tradicionais.".into()),
                address: Some("Solar dos Presuntos, Rua das Portas de Santo Antão 150, Lisboa".into()),
                ..CardText::new(
                    "Carne",
                    "Pratos de carne como cozido e leitão são ícones da gastronomia nacional.",
                )
            }),
        Card::new(cat, 6, "sopa")
            .with_coordinate(38.7152, -9.1377) // Zé dos Cornos
            .with_text(En, CardText {
                description: Some("Caldo verde is made with kale, potato, and chorizo, a constant presence at the table.".into()),
                history: Some("Simple soups were the basis of popular diet, evolving into regional recipes.".into()),
                address: Some("Zé dos Cornos, Beco dos Surradores 5, Lisbon".into()),
                ..CardText::new("Soup", "Soups like caldo verde warm and nourish in any season.")
            })
            .with_text(Pt, CardText {
                description: Some("Caldo verde leva couve, batata e chouriço, sendo presença constante nas mesas.".into()),
                history: Some("Sopas simples eram base da alimentação popular, evoluindo para receitas regionais.".into()),
                address: Some("Zé dos Cornos, Beco dos Surradores 5, Lisboa".into()),
                ..CardText::new("Sopa", "Sopas como caldo verde aquecem e alimentam em qualquer estação.")
            }),
        Card::new(cat, 7, "vinho")
            .with_coordinate(38.7150, -9.1432) // Solar do Vinho do Porto
            .with_text(En, CardText {
                description: Some("Red, white, and green wines accompany dishes and celebrate the country's diversity.".into()),
                history: Some("Wine production dates back to Roman times, with demarcated regions since the 18th century.".into()),
                address: Some("Solar do Vinho do Porto, Rua de São Pedro de Alcântara 45, Lisbon".into()),
                ..CardText::new("Wine", "Portugal is a land of unique wines, from Port to Alentejo.")
            })
            .with_text(Pt, CardText {
                description: Some("Tintos, brancos e verdes acompanham pratos e celebram a diversidade do país.".into()),
                history: Some("A produção de vinho remonta à época romana, com regiões demarcadas desde o século XVIII.".into()),
                address: Some("Solar do Vinho do Porto, Rua de São Pedro de Alcântara 45, Lisboa".into()),
                ..CardText::new("Vinho", "Portugal é terra de vinhos únicos, do Porto ao Alentejo.")
            }),
        // The other seventh cards skip geo data; this one keeps the
        // original's downtown placeholder pin.
        Card::new(cat, 8, "plus_gastronomy")
            .with_coordinate(38.7225, -9.1390)
            .with_text(En, CardText {
                description: Some("Portuguese gastronomy is rich in fresh ingredients and family recipes.".into()),
                history: Some("The fusion of cultures and ingredients made Portuguese cuisine one of the most varied in Europe.".into()),
                address: Some("Various restaurants and taverns in Portugal".into()),
                ..CardText::new(
                    "More Gastronomy",
                    "Discover new flavors and traditional recipes throughout the country.",
                )
            })
            .with_text(Pt, CardText {
                description: Some("A gastronomia portuguesa é rica em ingredientes frescos e receitas de família.".into()),
                history: Some("A fusão de culturas e ingredientes fez da cozinha portuguesa uma das mais variadas da Europa.".into()),
                address: Some("Diversos restaurantes e tascas em Portugal".into()),
                ..CardText::new(
                    "Mais Gastronomia",
                    "Descubra novos sabores e receitas tradicionais em todo o país.",
                )
            }),
    ]
}

fn popular() -> Vec<Card> {
    let cat = Category::Popular;
    vec![
        Card::new(cat, 1, "azulejos")
            .with_coordinate(38.7139, -9.1162) // Museu Nacional do Azulejo
            .with_text(En, CardText::new(
                "Azulejos",
                "The colorful art that covers facades and tells stories in Lisbon.",
            ))
            .with_text(Pt, CardText::new(
                "Azulejos",
                "A arte colorida que cobre fachadas e conta histórias em Lisboa.",
            )),
        Card::new(cat, 2, "fado")
            .with_coordinate(38.7132, -9.1296) // Museu do Fado
            .with_text(En, CardText::new(
                "Fado",
                "The nostalgic music that echoes through the city's alleys.",
            ))
            .with_text(Pt, CardText::new(
                "Fado",
                "A música nostálgica que ecoa pelas vielas da cidade.",
            )),
        Card::new(cat, 3, "tram28")
            .with_coordinate(38.7167, -9.1356) // Martim Moniz stop
            .with_text(En, CardText::new(
                "Tram 28",
                "Lisbon's most famous tram, crossing historic neighborhoods.",
            ))
            .with_text(Pt, CardText::new(
                "Eléctrico 28",
                "O bonde mais famoso de Lisboa, cruzando bairros históricos.",
            )),
        Card::new(cat, 4, "tascas")
            .with_coordinate(38.7135, -9.1460) // Tasca do Chico
            .with_text(En, CardText::new(
                "Tascas",
                "Small typical restaurants, full of flavor and tradition.",
            ))
            .with_text(Pt, CardText::new(
                "Tascas",
                "Pequenos restaurantes típicos, cheios de sabor e tradição.",
            )),
        Card::new(cat, 5, "ladra")
            .with_coordinate(38.7172, -9.1246)
            .with_text(En, CardText::new(
                "Feira da Ladra",
                "The most famous flea market for finds and antiques.",
            ))
            .with_text(Pt, CardText::new(
                "Feira da Ladra",
                "O mercado de pulgas mais famoso para achados e antiguidades.",
            )),
        Card::new(cat, 6, "futebol")
            .with_coordinate(38.7633, -9.1847) // Estádio da Luz
            .with_text(En, CardText::new(
                "Football",
                "The national passion that brings crowds together in Lisbon.",
            ))
            .with_text(Pt, CardText::new(
                "Football",
                "A paixão nacional que une multidões em Lisboa.",
            )),
        Card::new(cat, 7, "santos")
            .with_coordinate(38.7131, -9.1449) // Bairro Alto
            .with_text(En, CardText::new(
                "Santos Populares",
                "Lively street festivals with music, sardines, and joy.",
            ))
            .with_text(Pt, CardText::new(
                "Santos Populares",
                "Festas de rua animadas com música, sardinha e alegria.",
            )),
        Card::new(cat, 8, "plus_popular")
            .with_coordinate(38.7200, -9.1400)
            .with_text(En, CardText::new(
                "More Traditions",
                "Discover other Lisbon traditions and customs.",
            ))
            .with_text(Pt, CardText::new(
                "Mais Tradições",
                "Descubra outras tradições e costumes lisboetas.",
            )),
    ]
}

fn churches() -> Vec<Card> {
    let cat = Category::Churches;
    vec![
        Card::new(cat, 1, "se_lisboa")
            .with_coordinate(38.7108, -9.1332)
            .with_text(En, CardText::new(
                "Sé Cathedral",
                "Lisbon's oldest cathedral, a symbol of faith and the city's history.",
            ))
            .with_text(Pt, CardText::new(
                "Sé Catedral",
                "A catedral mais antiga de Lisboa, símbolo da fé e da história da cidade.",
            )),
        Card::new(cat, 2, "jeronimos")
            .with_coordinate(38.6978, -9.2065)
            .with_text(En, CardText::new(
                "Jerónimos Monastery",
                "A Manueline masterpiece and UNESCO World Heritage Site.",
            ))
            .with_text(Pt, CardText::new(
                "Mosteiro dos Jerónimos",
                "Obra-prima do manuelino e Patrimônio Mundial da UNESCO.",
            )),
        Card::new(cat, 3, "sao_domingos")
            .with_coordinate(38.7142, -9.1392)
            .with_text(En, CardText::new(
                "São Domingos",
                "A church marked by tragedies and reconstructions, full of history.",
            ))
            .with_text(Pt, CardText::new(
                "São Domingos",
                "Igreja marcada por tragédias e reconstruções, cheia de história.",
            )),
        Card::new(cat, 4, "sao_roque")
            .with_coordinate(38.7147, -9.1441)
            .with_text(En, CardText::new(
                "São Roque",
                "One of the oldest Jesuit churches in the world, with a rich interior.",
            ))
            .with_text(Pt, CardText::new(
                "São Roque",
                "Uma das igrejas jesuítas mais antigas do mundo, com interior riquíssimo.",
            )),
        Card::new(cat, 5, "basilica_estrela")
            .with_coordinate(38.7162, -9.1604)
            .with_text(En, CardText::new(
                "Estrela Basilica",
                "Imposing white-domed basilica, a landmark in Lisbon's skyline.",
            ))
            .with_text(Pt, CardText::new(
                "Basílica da Estrela",
                "Imponente basílica de cúpula branca, referência no horizonte lisboeta.",
            )),
        Card::new(cat, 6, "ruinasdocarmo")
            .with_coordinate(38.7126, -9.1416)
            .with_text(En, CardText::new(
                "Carmo",
                "Gothic ruins that bear witness to the great 1755 earthquake.",
            ))
            .with_text(Pt, CardText::new(
                "Carmo",
                "Ruínas góticas que testemunham o grande terremoto de 1755.",
            )),
        Card::new(cat, 7, "cristo")
            .with_coordinate(38.6781, -9.1776)
            .with_text(En, CardText::new(
                "Cristo Rei",
                "Monumental statue with panoramic views over Lisbon and the Tagus.",
            ))
            .with_text(Pt, CardText::new(
                "Cristo-Rei",
                "Estátua monumental com vista panorâmica sobre Lisboa e o Tejo.",
            )),
        // Catch-all pinned at the Fátima sanctuary.
        Card::new(cat, 8, "fatima")
            .with_coordinate(39.6325, -8.6718)
            .with_text(En, CardText::new(
                "More Churches",
                "Discover other historic churches and temples in Lisbon.",
            ))
            .with_text(Pt, CardText::new(
                "Mais Igrejas",
                "Descubra outras igrejas e templos históricos de Lisboa.",
            )),
    ]
}

fn museums() -> Vec<Card> {
    let cat = Category::Museums;
    vec![
        Card::new(cat, 1, "azulejos_museu")
            .with_coordinate(38.7231, -9.1156)
            .with_text(En, CardText::new(
                "Tile Museum",
                "Celebrates the art of Portuguese tiles from the 15th century to today.",
            ))
            .with_text(Pt, CardText::new(
                "Museu dos Azulejos",
                "Celebra a arte dos azulejos portugueses do século XV ao presente.",
            )),
        Card::new(cat, 2, "fcg")
            .with_coordinate(38.7371, -9.1527)
            .with_text(En, CardText::new(
                "Gulbenkian Museum",
                "World-class art collection, from Egypt to modern art.",
            ))
            .with_text(Pt, CardText::new(
                "Museu Gulbenkian",
                "Coleção de arte de renome mundial, do Egito à arte moderna.",
            )),
        Card::new(cat, 3, "coches")
            .with_coordinate(38.6973, -9.1976)
            .with_text(En, CardText::new(
                "Coach Museum",
                "The world's largest collection of royal coaches.",
            ))
            .with_text(Pt, CardText::new(
                "Museu dos Coches",
                "A maior coleção de coches reais do mundo.",
            )),
        Card::new(cat, 4, "fado")
            .with_coordinate(38.7132, -9.1296)
            .with_text(En, CardText::new(
                "Fado Museum",
                "Dedicated to the history and culture of Fado, Lisbon's music.",
            ))
            .with_text(Pt, CardText::new(
                "Museu do Fado",
                "Dedicado à história e cultura do Fado, música de Lisboa.",
            )),
        Card::new(cat, 5, "arte_antiga")
            .with_coordinate(38.7074, -9.1702)
            .with_text(En, CardText::new(
                "Ancient Art Museum",
                "Masterpieces of Portuguese and European art from the 12th to 19th centuries.",
            ))
            .with_text(Pt, CardText::new(
                "Museu de Arte Antiga",
                "Obras-primas da arte portuguesa e europeia dos séculos XII a XIX.",
            )),
        Card::new(cat, 6, "ccb")
            .with_coordinate(38.6956, -9.2070)
            .with_text(En, CardText::new(
                "CCB",
                "Belém Cultural Center: exhibitions, concerts, and contemporary art.",
            ))
            .with_text(Pt, CardText::new(
                "CCB",
                "Centro Cultural de Belém: exposições, concertos e arte contemporânea.",
            )),
        Card::new(cat, 7, "maat")
            .with_coordinate(38.6952, -9.1970)
            .with_text(En, CardText::new(
                "MAAT",
                "Museum of Art, Architecture and Technology by the Tagus river.",
            ))
            .with_text(Pt, CardText::new(
                "MAAT",
                "Museu de Arte, Arquitetura e Tecnologia à beira do Tejo.",
            )),
        Card::new(cat, 8, "plus_museums")
            .with_coordinate(38.7200, -9.1400)
            .with_text(En, CardText::new(
                "More Museums",
                "Discover other fascinating museums in Lisbon.",
            ))
            .with_text(Pt, CardText::new(
                "Mais Museus",
                "Descubra outros museus fascinantes de Lisboa.",
            )),
    ]
}

fn sintra() -> Vec<Card> {
    let cat = Category::Sintra;
    vec![
        Card::new(cat, 1, "palacio_pena")
            .with_coordinate(38.7876, -9.3904)
            .with_text(En, CardText::new(
                "Palácio da Pena",
                "A colorful Romanticist palace on a hilltop, symbol of Sintra.",
            ))
            .with_text(Pt, CardText::new(
                "Palácio da Pena",
                "Palácio romântico e colorido no topo da serra, símbolo de Sintra.",
            )),
        Card::new(cat, 2, "travesseiros")
            .with_coordinate(38.7971, -9.3907) // Piriquita
            .with_text(En, CardText::new(
                "Travesseiros & Queijadas",
                "Traditional Sintra pastries, sweet and unique.",
            ))
            .with_text(Pt, CardText::new(
                "Travesseiros e Queijadas",
                "Doces típicos de Sintra, saborosos e únicos.",
            )),
        Card::new(cat, 3, "castelo_mouros")
            .with_coordinate(38.7925, -9.3867)
            .with_text(En, CardText::new(
                "Castelo dos Mouros",
                "Ancient Moorish castle with panoramic views.",
            ))
            .with_text(Pt, CardText::new(
                "Castelo dos Mouros",
                "Castelo mouro antigo com vistas panorâmicas.",
            )),
        Card::new(cat, 4, "quinta_regaleira")
            .with_coordinate(38.7976, -9.3964)
            .with_text(En, CardText::new(
                "Quinta da Regaleira",
                "A mystical estate with gardens, tunnels, and symbolism.",
            ))
            .with_text(Pt, CardText::new(
                "Quinta da Regaleira",
                "Propriedade mística com jardins, túneis e simbolismo.",
            )),
        Card::new(cat, 5, "monserrate_parque")
            .with_coordinate(38.7952, -9.4056)
            .with_text(En, CardText::new(
                "Parque de Monserrate",
                "Exotic gardens and a unique palace in Sintra.",
            ))
            .with_text(Pt, CardText::new(
                "Parque de Monserrate",
                "Jardins exóticos e palácio único em Sintra.",
            )),
        Card::new(cat, 6, "convento_capuchos")
            .with_coordinate(38.7857, -9.4302)
            .with_text(En, CardText::new(
                "Convento dos Capuchos",
                "A humble and historic convent surrounded by nature.",
            ))
            .with_text(Pt, CardText::new(
                "Convento dos Capuchos",
                "Convento humilde e histórico rodeado de natureza.",
            )),
        Card::new(cat, 7, "palacio_vila")
            .with_coordinate(38.7972, -9.3907)
            .with_text(En, CardText::new(
                "Palácio da Vila",
                "The medieval royal palace in the heart of Sintra.",
            ))
            .with_text(Pt, CardText::new(
                "Palácio da Vila",
                "O palácio real medieval no centro de Sintra.",
            )),
        Card::new(cat, 8, "plus_sintra")
            .with_coordinate(38.8000, -9.3900)
            .with_text(En, CardText::new(
                "Mais Sintra",
                "Discover even more wonders in Sintra!",
            ))
            .with_text(Pt, CardText::new(
                "Mais Sintra",
                "Descubra ainda mais maravilhas em Sintra!",
            )),
    ]
}

// European-Portuguese words for visitors; deliberately pt-only, no geo
// data, and read-only to Portuguese-language users elsewhere in the
// policy layer.
fn vocabulary_pt() -> Vec<Card> {
    let cat = Category::VocabularyPt;
    vec![
        Card::new(cat, 1, "telemovel").with_text(Pt, CardText {
            usage_example: Some("Perdi o meu telemóvel no eléctrico.".into()),
            pronunciation: Some("te-le-MÓ-vel".into()),
            ..CardText::new(
                "Telemóvel",
                "Palavra portuguesa para celular (Brasil) ou mobile phone (UK).",
            )
        }),
        Card::new(cat, 2, "comboio").with_text(Pt, CardText {
            usage_example: Some("O comboio para Sintra parte do Rossio.".into()),
            pronunciation: Some("com-BOI-o".into()),
            ..CardText::new("Comboio", "Trem (Brasil) ou train (UK/US).")
        }),
        Card::new(cat, 3, "autocarro").with_text(Pt, CardText {
            usage_example: Some("Apanhei o autocarro 728 para Belém.".into()),
            pronunciation: Some("au-to-CA-rro".into()),
            ..CardText::new("Autocarro", "Ônibus (Brasil) ou bus (UK/US).")
        }),
        Card::new(cat, 4, "tram28").with_text(Pt, CardText {
            usage_example: Some("O eléctrico 28 sobe a Graça cheio de turistas.".into()),
            pronunciation: Some("e-LÉ-tri-co".into()),
            ..CardText::new("Eléctrico", "Bonde (Brasil) ou tram (UK).")
        }),
    ]
}

// English phrases for locals; en-only counterpart of the deck above.
fn vocabulary_en() -> Vec<Card> {
    let cat = Category::VocabularyEn;
    vec![
        Card::new(cat, 1, "ola").with_text(En, CardText {
            usage_example: Some("Hello! Could you help me find the cathedral?".into()),
            pronunciation: Some("heh-LOH".into()),
            ..CardText::new("Hello", "A common greeting in English.")
        }),
        Card::new(cat, 2, "porFavor").with_text(En, CardText {
            usage_example: Some("Two coffees, please.".into()),
            pronunciation: Some("pleez".into()),
            ..CardText::new("Please", "Used to make polite requests.")
        }),
        Card::new(cat, 3, "obrigado").with_text(En, CardText {
            usage_example: Some("Thank you for the directions!".into()),
            pronunciation: Some("thank-YOO".into()),
            ..CardText::new("Thank you", "To express gratitude.")
        }),
        Card::new(cat, 4, "adeus").with_text(En, CardText {
            usage_example: Some("Goodbye, see you tomorrow.".into()),
            pronunciation: Some("good-BYE".into()),
            ..CardText::new("Goodbye", "A way to say farewell.")
        }),
    ]
}
