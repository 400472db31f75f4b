#![deny(warnings)]

/// A buffered cursor over any iterator.
///
/// Items pulled from the source stay in the buffer until they are either
/// `extract`ed or `ignore`d, which makes it cheap to look ahead and to
/// backtrack to a previously saved `pos`.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    // number of buffered items consumed into the current lexeme
    pos: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.fill(self.pos + 1) {
            return None;
        }
        self.pos += 1;
        Some(self.buf[self.pos - 1].clone())
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: 0}
    }

    pub fn pos(&self) -> usize { self.pos }

    // Only positions that were already buffered can be restored
    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    // pull from the source until the buffer holds at least n items
    fn fill(&mut self, n: usize) -> bool {
        while self.buf.len() < n {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => return false,
            }
        }
        true
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.fill(self.pos + 1) {
            Some(self.buf[self.pos].clone())
        } else {
            None
        }
    }

    pub fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    pub fn ignore(&mut self) {
        self.extract();
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let rest = self.buf.split_off(self.pos);
        self.pos = 0;
        std::mem::replace(&mut self.buf, rest)
    }

    // Advance while `pred` holds, returns if the scanner moved at all
    pub fn skip_matching<F>(&mut self, pred: F) -> bool where F: Fn(&I::Item) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if !pred(&next) { break; }
            self.pos += 1;
            advanced = true;
        }
        advanced
    }

    // Advance up to (not including) the first item matching `stop` or EOF
    pub fn until<F>(&mut self, stop: F) -> bool where F: Fn(&I::Item) -> bool {
        self.skip_matching(|item| !stop(item))
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        match self.peek() {
            Some(next) if any.contains(&next) => {
                self.pos += 1;
                Some(next)
            },
            _ => None
        }
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_matching(|c| c.is_whitespace())
    }
}
