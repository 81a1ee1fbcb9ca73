// src/noyau/analyse.rs
//
// Descente récursive : jetons -> AST
//
// Grammaire (de la plus faible à la plus forte priorité) :
//   expression := terme (('+' | '-') terme)*
//   terme      := unaire (('*' | '/' | '%') unaire)*
//   unaire     := ('+' | '-') unaire | puissance
//   puissance  := primaire ('**' unaire)?          (associatif à droite, 2**-1 permis)
//   primaire   := nombre | ident | ident '(' args? ')' | '(' expression ')'
//   args       := expression (',' expression)*
//
// Règles:
// - Aucune vérification de table ici (c’est le rôle de l’évaluateur).
// - La cible d’un appel est toujours un identifiant nu : "(f)(2)" = entrée résiduelle.
// - Profondeur bornée (parenthèses, arguments, chaînes unaires / puissances).

use super::ast::{BinaryOp, Node, UnaryOp};
use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::limites::Limites;

/// Analyse une chaîne canonique (sortie de preprocess) en AST.
pub fn parse(canon: &str, limites: &Limites) -> Result<Node, EvaluationError> {
    let jetons = tokenize(canon)?;
    if jetons.is_empty() {
        return Err(EvaluationError::EmptyInput);
    }
    tracing::trace!(jetons = %format_tokens(&jetons), "tokenize");

    let mut a = Analyseur {
        jetons: &jetons,
        pos: 0,
        profondeur: 0,
        profondeur_max: limites.profondeur_max,
    };

    let racine = a.expression()?;
    if let Some(t) = a.suivant() {
        return Err(EvaluationError::syntaxe(format!(
            "entrée résiduelle à partir de '{}'",
            decrire(t)
        )));
    }
    Ok(racine)
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
    profondeur_max: usize,
}

impl Analyseur<'_> {
    fn suivant(&self) -> Option<&Tok> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&Tok> {
        let t = self.jetons.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn consommer_si(&mut self, attendu: &Tok) -> bool {
        if self.suivant() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn exiger_rpar(&mut self) -> Result<(), EvaluationError> {
        match self.avancer() {
            Some(Tok::RPar) => Ok(()),
            Some(t) => Err(EvaluationError::syntaxe(format!(
                "')' attendue, trouvé '{}'",
                decrire(t)
            ))),
            None => Err(EvaluationError::syntaxe("parenthèse non fermée")),
        }
    }

    fn entrer(&mut self) -> Result<(), EvaluationError> {
        self.profondeur += 1;
        if self.profondeur > self.profondeur_max {
            return Err(EvaluationError::NestingTooDeep {
                max: self.profondeur_max,
            });
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    /* ------------------------ Niveaux de priorité ------------------------ */

    fn expression(&mut self) -> Result<Node, EvaluationError> {
        let mut gauche = self.terme()?;
        loop {
            let op = match self.suivant() {
                Some(Tok::Plus) => BinaryOp::Add,
                Some(Tok::Minus) => BinaryOp::Sub,
                _ => return Ok(gauche),
            };
            self.pos += 1;
            let droite = self.terme()?;
            gauche = Node::binaire(op, gauche, droite);
        }
    }

    fn terme(&mut self) -> Result<Node, EvaluationError> {
        let mut gauche = self.unaire()?;
        loop {
            let op = match self.suivant() {
                Some(Tok::Star) => BinaryOp::Mul,
                Some(Tok::Slash) => BinaryOp::Div,
                Some(Tok::Percent) => BinaryOp::Mod,
                _ => return Ok(gauche),
            };
            self.pos += 1;
            let droite = self.unaire()?;
            gauche = Node::binaire(op, gauche, droite);
        }
    }

    fn unaire(&mut self) -> Result<Node, EvaluationError> {
        let op = match self.suivant() {
            Some(Tok::Plus) => UnaryOp::Plus,
            Some(Tok::Minus) => UnaryOp::Minus,
            _ => return self.puissance(),
        };
        self.pos += 1;

        self.entrer()?;
        let x = self.unaire()?;
        self.sortir();
        Ok(Node::unaire(op, x))
    }

    fn puissance(&mut self) -> Result<Node, EvaluationError> {
        let base = self.primaire()?;
        if !self.consommer_si(&Tok::StarStar) {
            return Ok(base);
        }

        self.entrer()?;
        let exp = self.unaire()?;
        self.sortir();
        Ok(Node::binaire(BinaryOp::Pow, base, exp))
    }

    fn primaire(&mut self) -> Result<Node, EvaluationError> {
        let tok = match self.avancer() {
            Some(t) => t.clone(),
            None => return Err(EvaluationError::syntaxe("fin d’expression inattendue")),
        };

        match tok {
            Tok::Num(v) => Ok(Node::Literal(v)),

            Tok::Ident(name) => {
                if !self.consommer_si(&Tok::LPar) {
                    return Ok(Node::Identifier(name));
                }
                self.entrer()?;
                let args = self.arguments()?;
                self.exiger_rpar()?;
                self.sortir();
                Ok(Node::Call(name, args))
            }

            Tok::LPar => {
                self.entrer()?;
                let e = self.expression()?;
                self.exiger_rpar()?;
                self.sortir();
                Ok(e)
            }

            autre => Err(EvaluationError::syntaxe(format!(
                "jeton inattendu: '{}'",
                decrire(&autre)
            ))),
        }
    }

    /// Zéro ou plusieurs expressions séparées par des virgules (la ')' reste à consommer).
    fn arguments(&mut self) -> Result<Vec<Node>, EvaluationError> {
        let mut args = Vec::new();
        if self.suivant() == Some(&Tok::RPar) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if !self.consommer_si(&Tok::Comma) {
                return Ok(args);
            }
        }
    }
}

fn decrire(t: &Tok) -> String {
    format_tokens(std::slice::from_ref(t))
}
