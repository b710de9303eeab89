//! The authored portfolio tables.
//!
//! Content is Portuguese by design; identifiers and structure stay English.

use super::{
    Badge, CertificationEntry, Contact, ContactLink, EducationEntry, ExperiencePoint,
    HighlightCard, JobEntry, LanguageEntry, Portfolio, Profile, RadarAxis, SkillEntry,
    TechnologyEntry,
};

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Everton Araújo",
        headline: "Especialista em Automação de Processos e Cibersegurança",
        tagline: "Mais de 10 anos transformando processos manuais em soluções automatizadas, \
                  com foco em segurança da informação e eficiência operacional.",
        bio: &[
            "Sou um profissional de TI com mais de 10 anos de experiência no mercado. \
             Possuo sólida experiência em administração de redes e me especializei na \
             implementação de ferramentas essenciais do Blue Team, destacando-me na \
             configuração avançada de SIEM open source.",
            "Tenho expertise na configuração de XDR, permitindo respostas automáticas \
             a ameaças suspeitas. Sempre em busca de me manter atualizado às tendências \
             do mercado, concluí recentemente o curso de especialização em Segurança da \
             Informação.",
        ],
        badges: &[
            Badge { label: "10+ Anos de Experiência", color: "blue" },
            Badge { label: "Blue Team", color: "purple" },
            Badge { label: "SIEM Specialist", color: "green" },
            Badge { label: "XDR Expert", color: "red" },
        ],
    },

    highlights: &[
        HighlightCard {
            title: "Segurança da Informação",
            body: "Especialização em SIEM, XDR, Pentest e Hardening de sistemas.",
            color: "blue",
        },
        HighlightCard {
            title: "Automação de Processos",
            body: "Transformação de processos manuais em fluxos automatizados com n8n e APIs.",
            color: "green",
        },
        HighlightCard {
            title: "Administração de Redes",
            body: "Expertise em BGP, VPNs, VLANs, Routing e Switching.",
            color: "purple",
        },
    ],

    job: JobEntry {
        company: "CDT Network LTDA",
        role: "Analista de Infraestrutura Sênior",
        period: "2010 - Atual",
        duties: &[
            "Administração de redes BGP, WAN, LAN, VPNs, VLANs",
            "Monitoramento com Zabbix e painéis Grafana",
            "Implantação e administração de SIEM Wazuh",
            "Hardening Windows/Linux e configuração XDR",
            "Automação com Python, Bash, PowerShell",
            "Administração Linux, Windows Server, Hyper-V",
        ],
    },

    skills: &[
        SkillEntry { name: "Redes", value: 95, color: "#3b82f6" },
        SkillEntry { name: "Segurança", value: 90, color: "#ef4444" },
        SkillEntry { name: "Automação", value: 85, color: "#10b981" },
        SkillEntry { name: "Monitoramento", value: 88, color: "#f59e0b" },
        SkillEntry { name: "Sistemas", value: 92, color: "#8b5cf6" },
    ],

    experience: &[
        ExperiencePoint { year: "2010", level: 30 },
        ExperiencePoint { year: "2012", level: 45 },
        ExperiencePoint { year: "2015", level: 60 },
        ExperiencePoint { year: "2018", level: 75 },
        ExperiencePoint { year: "2020", level: 85 },
        ExperiencePoint { year: "2023", level: 95 },
        ExperiencePoint { year: "2024", level: 100 },
    ],

    radar: &[
        RadarAxis { subject: "Redes", score: 95, full_mark: 100 },
        RadarAxis { subject: "Segurança", score: 90, full_mark: 100 },
        RadarAxis { subject: "Automação", score: 85, full_mark: 100 },
        RadarAxis { subject: "Monitoramento", score: 88, full_mark: 100 },
        RadarAxis { subject: "Sistemas", score: 92, full_mark: 100 },
        RadarAxis { subject: "Scripting", score: 80, full_mark: 100 },
    ],

    technologies: &[
        TechnologyEntry { name: "Zabbix", level: 95, category: "Monitoramento" },
        TechnologyEntry { name: "Wazuh", level: 90, category: "Segurança" },
        TechnologyEntry { name: "n8n", level: 85, category: "Automação" },
        TechnologyEntry { name: "Grafana", level: 88, category: "Monitoramento" },
        TechnologyEntry { name: "Python", level: 80, category: "Scripting" },
        TechnologyEntry { name: "Linux", level: 92, category: "Sistemas" },
        TechnologyEntry { name: "BGP", level: 95, category: "Redes" },
        TechnologyEntry { name: "Sophos", level: 85, category: "Segurança" },
        TechnologyEntry { name: "Veeam", level: 88, category: "Backup" },
        TechnologyEntry { name: "PowerShell", level: 82, category: "Scripting" },
    ],

    education: &[
        EducationEntry {
            degree: "Pós-Graduação em Cyber Security",
            institution: "IDESP - Instituto Daryus de Ensino Superior Paulista",
            year: "2023",
        },
        EducationEntry {
            degree: "Tecnologia em Redes de Computadores",
            institution: "Universidade Católica de Santos",
            year: "2011",
        },
    ],

    languages: &[
        LanguageEntry { name: "Português", level: "Nativo" },
        LanguageEntry { name: "Inglês", level: "Intermediário" },
    ],

    certifications: &[
        CertificationEntry {
            name: "ITIL Foundation Certificate in IT Service Management",
            year: "2012",
            org: None,
            id: Some("4435876.1054719"),
        },
        CertificationEntry {
            name: "XG Firewall – Sophos Certified Architect",
            year: "2018",
            org: None,
            id: None,
        },
        CertificationEntry {
            name: "MCTS - Windows Server 2008 Active Directory",
            year: "2008",
            org: Some("KA Solution"),
            id: None,
        },
        CertificationEntry {
            name: "Configuring and Troubleshooting Windows Server",
            year: "2008",
            org: Some("KA Solution"),
            id: None,
        },
        CertificationEntry {
            name: "Active Directory Domain Services 6426",
            year: "2008",
            org: Some("KA Solution"),
            id: None,
        },
        CertificationEntry {
            name: "Gestão de Mudanças: 4 práticas essenciais",
            year: "2015",
            org: Some("EXIN"),
            id: None,
        },
    ],

    contact: Contact {
        blurb: "Estou sempre aberto a discutir novas oportunidades, projetos interessantes \
                ou simplesmente trocar ideias sobre tecnologia, automação e segurança da \
                informação.",
        callout_title: "Pronto para colaborar?",
        callout_body: "Vamos transformar ideias em soluções!",
        links: &[
            ContactLink {
                label: "E-mail",
                value: "evertonsaraujo@gmail.com",
                url: "mailto:evertonsaraujo@gmail.com",
            },
            ContactLink {
                label: "LinkedIn",
                value: "it-everton-araujo",
                url: "https://www.linkedin.com/in/it-everton-araujo/",
            },
        ],
    },

    footer: "© 2024 Everton Araújo. Desenvolvido com Rust e muito ☕",
};
